mod app;
mod messages;
mod states;
mod sync;
mod ui;
mod view_state;

#[cfg(test)]
mod tests;

use app::App;

fn main() -> iced::Result {
    env_logger::init();
    iced::application("unofelt", App::update, App::view)
        .subscription(App::subscription)
        .window_size(iced::Size::new(ui::layout::CANVAS_W, ui::layout::CANVAS_H))
        .theme(|_| iced::Theme::Dark)
        .run()
}
