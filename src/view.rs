use crate::app::{Message, WeatherApp};
use crate::components;
use iced::{
    widget::{column, container},
    Alignment, Element, Length,
};

pub fn view(app: &WeatherApp) -> Element<Message> {
    let current_card = components::create_current_weather_card(app);
    let forecast_card = components::create_forecast_card(app);
    let fetch_button = components::create_fetch_button(app);

    let content = column![current_card, forecast_card, fetch_button]
        .spacing(16)
        .padding(10)
        .align_items(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
        .into()
}
