//! Container holding the Bevy canvas.

use yew::prelude::*;

/// Canvas element ID the Bevy window attaches to.
pub const SCENE_CANVAS_ID: &str = "scene-canvas";

#[function_component(SceneContainer)]
pub fn scene_container() -> Html {
    html! {
        <div id="scene-container">
            <canvas id={SCENE_CANVAS_ID} class="bevy-canvas" />
        </div>
    }
}
