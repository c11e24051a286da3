use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::info::render_view;
use crate::ui::layout::layout_regions;
use crate::view::View;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, view: &View) {
    let regions = layout_regions(frame.area());

    let header = Header::new(app.backend_name(), app.request_state());
    frame.render_widget(header.widget(), regions.header);
    if regions.form.height > 0 {
        render_form(frame, regions.form, app.form());
    }
    frame.render_widget(Clear, regions.body);
    if regions.body.height > 0 {
        render_view(frame, regions.body, view, app.animation_tick());
    }
    let footer = Footer::new(app.request_state(), app.form().has_pending_edit());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}
