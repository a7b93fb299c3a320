//! Score display.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScoreDisplayProps {
    pub score: u32,
    pub visible: bool,
}

/// `#score-container` with the `#score` counter. Hidden until exploration starts.
#[function_component(ScoreDisplay)]
pub fn score_display(props: &ScoreDisplayProps) -> Html {
    let style = if props.visible {
        "display: block;"
    } else {
        "display: none;"
    };

    html! {
        <div id="score-container" {style}>
            { "Βαθμολογία: " }
            <span id="score">{ props.score }</span>
        </div>
    }
}
