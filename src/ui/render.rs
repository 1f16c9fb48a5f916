use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::layout::layout_regions;
use crate::ui::views::{data_view, fallback_view, idle_view, loading_view};
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Draw one frame from the snapshot produced by [`App::view`].
pub fn draw(frame: &mut Frame<'_>, app: &App, screen: &Screen) {
    let (form, body, footer) = layout_regions(frame.area());

    frame.render_widget(app.form().widget(), form);

    frame.render_widget(Clear, body);
    match screen {
        Screen::Idle => frame.render_widget(idle_view(), body),
        Screen::Loading { name } => {
            frame.render_widget(loading_view(name, app.animation_tick()), body)
        }
        Screen::Data(pokemon) => frame.render_widget(data_view(pokemon), body),
        Screen::Fallback(error) => frame.render_widget(fallback_view(error), body),
    }

    let footer_widget = Footer::new(screen.is_fallback());
    frame.render_widget(footer_widget.widget(footer), footer);
}
