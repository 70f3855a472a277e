use crate::config::AppConfig;
use crate::error::WeatherError;
use crate::pipeline;
use crate::presenter::DisplayBundle;
use crate::transport::HttpTransport;
use crate::view;
use chrono::{DateTime, Local};
use iced::{Application, Command, Element, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    FetchWeather,
    WeatherFetched(Result<DisplayBundle, WeatherError>),
}

/// Everything the window needs from process start-up.
pub struct Flags {
    pub config: AppConfig,
    pub transport: HttpTransport,
}

pub struct WeatherApp {
    config: AppConfig,
    transport: HttpTransport,
    pub bundle: Option<DisplayBundle>,
    pub loading: bool,
    pub error: Option<WeatherError>,
    pub last_updated: Option<DateTime<Local>>,
}

impl WeatherApp {
    fn with_flags(flags: Flags) -> Self {
        Self {
            config: flags.config,
            transport: flags.transport,
            bundle: None,
            loading: false,
            error: None,
            last_updated: None,
        }
    }

    fn start_fetch(&mut self) -> Command<Message> {
        self.loading = true;
        self.error = None;
        Command::perform(
            pipeline::run(self.transport.clone(), self.config.clone()),
            Message::WeatherFetched,
        )
    }
}

impl Application for WeatherApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = Flags;

    fn new(flags: Flags) -> (WeatherApp, Command<Message>) {
        let mut app = WeatherApp::with_flags(flags);
        let command = app.start_fetch();
        (app, command)
    }

    fn title(&self) -> String {
        String::from("Weather App")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::FetchWeather => {
                if self.loading {
                    return Command::none();
                }
                self.start_fetch()
            }
            Message::WeatherFetched(result) => {
                self.loading = false;
                match result {
                    Ok(bundle) => {
                        self.bundle = Some(bundle);
                        self.error = None;
                        self.last_updated = Some(Local::now());
                    }
                    // Whatever is on screen stays there.
                    Err(error) => self.error = Some(error),
                }
                Command::none()
            }
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::presenter::Recommendation;

    fn app() -> WeatherApp {
        let config = AppConfig::default();
        let transport = HttpTransport::new(&config.transport).unwrap();
        WeatherApp::with_flags(Flags { config, transport })
    }

    fn bundle() -> DisplayBundle {
        DisplayBundle {
            current_temperature: 18.0,
            recommendation: Recommendation::Mild,
            filtered_rows: Vec::new(),
        }
    }

    #[test]
    fn test_success_replaces_bundle() {
        let mut app = app();
        app.loading = true;
        let _ = app.update(Message::WeatherFetched(Ok(bundle())));

        assert!(!app.loading);
        assert_eq!(app.bundle, Some(bundle()));
        assert!(app.error.is_none());
        assert!(app.last_updated.is_some());
    }

    #[test]
    fn test_failure_keeps_previous_bundle() {
        let mut app = app();
        let _ = app.update(Message::WeatherFetched(Ok(bundle())));
        let updated = app.last_updated;

        app.loading = true;
        let _ = app.update(Message::WeatherFetched(Err(WeatherError::Fetch(
            FetchError::EmptyResponse,
        ))));

        assert!(!app.loading);
        assert_eq!(app.bundle, Some(bundle()));
        assert_eq!(app.last_updated, updated);
        assert_eq!(
            app.error.as_ref().map(WeatherError::user_message),
            Some("Failed to fetch weather data. Please try again.")
        );
    }

    #[test]
    fn test_fetch_ignored_while_loading() {
        let mut app = app();
        app.loading = true;
        app.error = Some(WeatherError::EmptySeries);
        let _ = app.update(Message::FetchWeather);

        assert!(app.loading);
        assert_eq!(app.error, Some(WeatherError::EmptySeries));
    }
}
