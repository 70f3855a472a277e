use crate::app::{Message, WeatherApp};
use iced::{
    alignment, theme,
    widget::{button, column, container, scrollable, text},
    Color, Element, Font, Length,
};

const FORECAST_TITLE: &str = "7-Day Hourly Forecast (Every 2 Hours)";

fn section<'a>(title: &'a str, body: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title).size(16), body].spacing(10))
        .padding(10)
        .style(theme::Container::Box)
        .width(Length::Fill)
        .into()
}

pub fn create_status_display(app: &WeatherApp) -> Element<Message> {
    let status_text = if let Some(error) = &app.error {
        text(error.user_message())
            .size(14)
            .style(Color::from_rgb(0.8, 0.2, 0.2))
    } else if let Some(updated) = &app.last_updated {
        text(format!("Updated: {}", updated.format("%I:%M:%S %p")))
            .size(12)
            .style(Color::from_rgb(0.5, 0.5, 0.5))
    } else {
        text("").size(12)
    };

    container(status_text).width(Length::Fill).center_x().into()
}

pub fn create_current_weather_card(app: &WeatherApp) -> Element<Message> {
    let summary = match &app.bundle {
        Some(bundle) => bundle.summary_text(),
        None if app.loading => "Fetching weather data...".to_string(),
        None => "Press Fetch Weather to load the forecast.".to_string(),
    };

    let body = column![
        container(text(summary).size(18)).width(Length::Fill).center_x(),
        create_status_display(app),
    ]
    .spacing(8);

    section("Current Weather", body.into())
}

pub fn create_forecast_card(app: &WeatherApp) -> Element<Message> {
    let table = app
        .bundle
        .as_ref()
        .map(|bundle| bundle.table_text())
        .unwrap_or_default();

    let table_view = scrollable(text(table).font(Font::MONOSPACE).size(13))
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Properties::default(),
            horizontal: scrollable::Properties::default(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

    container(section(FORECAST_TITLE, table_view.into()))
        .height(Length::Fill)
        .into()
}

pub fn create_fetch_button(app: &WeatherApp) -> Element<Message> {
    let label = text("Fetch Weather")
        .size(14)
        .horizontal_alignment(alignment::Horizontal::Center);

    let fetch_button = button(label)
        .padding([8, 16])
        .style(theme::Button::Primary);

    if app.loading {
        fetch_button.into()
    } else {
        fetch_button.on_press(Message::FetchWeather).into()
    }
}
