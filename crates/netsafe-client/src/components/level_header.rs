//! Level badge, title and description.

use yew::prelude::*;

const WELCOME_TITLE: &str = "Εξερευνητής Διαδικτύου";
const WELCOME_DESCRIPTION: &str =
    "Μάθετε να περιηγείστε με ασφάλεια. Ξεκινήστε την εξερεύνηση ή διαλέξτε ένα επίπεδο.";

#[derive(Properties, PartialEq)]
pub struct LevelHeaderProps {
    /// `#current-level` badge text; hidden when `None`.
    pub level_label: Option<AttrValue>,
    pub title: Option<AttrValue>,
    pub description: Option<AttrValue>,
}

#[function_component(LevelHeader)]
pub fn level_header(props: &LevelHeaderProps) -> Html {
    let badge_style = if props.level_label.is_some() {
        "display: block;"
    } else {
        "display: none;"
    };

    let title = props
        .title
        .clone()
        .unwrap_or(AttrValue::Static(WELCOME_TITLE));
    let description = props
        .description
        .clone()
        .unwrap_or(AttrValue::Static(WELCOME_DESCRIPTION));

    html! {
        <div class="container">
            <div id="current-level" style={badge_style}>
                { props.level_label.clone().unwrap_or_default() }
            </div>
            <h1>{ title }</h1>
            <p>{ description }</p>
        </div>
    }
}
