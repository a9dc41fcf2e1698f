use crate::ui::app::{App, Route};
use crate::ui::delete::render_delete_dialog;
use crate::ui::edit::render_edit;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::login::render_login;
use crate::ui::users::render_users;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(
        &app.config().api.base_url,
        app.session().is_authenticated(),
    );
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    match app.route() {
        Route::Login => render_login(frame, body, app.login(), app.tick()),
        Route::Users => {
            render_users(
                frame,
                body,
                app.users(),
                app.session().users(),
                app.tick(),
            );
            render_delete_dialog(frame, body, app.delete_dialog(), app.tick());
        }
        Route::Edit => render_edit(frame, body, app.edit(), app.tick()),
    }

    let footer_widget = Footer::new(app.route(), app.delete_dialog().is_visible());
    frame.render_widget(footer_widget.widget(footer), footer);
}
