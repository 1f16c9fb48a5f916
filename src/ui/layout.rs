use ratatui::layout::Rect;

/// Height of the input form (one text row plus borders).
const FORM_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Split the screen into form, info panel and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let form_height = area.height.min(FORM_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(form_height));
    let form = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: form_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + form_height,
        width: area.width,
        height: area.height.saturating_sub(form_height + footer_height),
    };
    (form, body, footer)
}
