use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading(String),
    Success(String),
    Error(String),
}

impl Status {
    /// Success messages clear themselves after a few seconds.
    pub fn is_transient(&self) -> bool {
        matches!(self, Status::Success(_))
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBarProps {
    pub status: Status,
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    let (color, text) = match &props.status {
        Status::Idle => ("inherit", ""),
        Status::Loading(msg) => ("gray", msg.as_str()),
        Status::Success(msg) => ("green", msg.as_str()),
        Status::Error(msg) => ("red", msg.as_str()),
    };

    html! {
        <div role="status" style={format!("min-height: 1.5em; margin: 8px 0; color: {};", color)}>
            { text }
        </div>
    }
}
