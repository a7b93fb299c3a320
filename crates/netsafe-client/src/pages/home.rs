//! Explorer page: chrome around the 3D scene.

use yew::prelude::*;

use crate::components::{
    IntroModal, Layout, LevelHeader, SCENE_CANVAS_ID, SceneContainer, ScoreDisplay, Sidebar,
    StartButton,
};
use crate::hooks::{ExplorerProvider, use_explorer, use_notices, use_session};

/// Config passed to the core. Assets are served from `assets/`.
const EXPLORER_CONFIG_JSON: &str = r#"{"asset_root":"assets"}"#;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <ExplorerProvider
            canvas_id={SCENE_CANVAS_ID}
            config_json={EXPLORER_CONFIG_JSON}
        >
            <ExplorerView />
        </ExplorerProvider>
    }
}

fn report(result: Result<(), String>) {
    if let Err(e) = result {
        tracing::warn!("command failed: {}", e);
    }
}

#[function_component(ExplorerView)]
fn explorer_view() -> Html {
    let explorer = use_explorer();
    let session = use_session();
    use_notices();

    let on_start = {
        let explorer = explorer.clone();
        Callback::from(move |()| report(explorer.start_exploration()))
    };
    let on_close = {
        let explorer = explorer.clone();
        Callback::from(move |()| report(explorer.close_modal()))
    };
    let on_select = Callback::from(move |level: i64| report(explorer.select_level(level)));

    let sidebar = html! {
        <Sidebar active={session.active_link} onselect={on_select} />
    };

    html! {
        <Layout {sidebar}>
            <StartButton
                visible={session.start_button_visible}
                color={session.start_button_color.clone()}
                onclick={on_start}
            />
            <LevelHeader
                level_label={session.level_label.clone().map(AttrValue::from)}
                title={session.title.clone().map(AttrValue::from)}
                description={session.description.clone().map(AttrValue::from)}
            />
            <ScoreDisplay score={session.score} visible={session.score_visible} />
            <SceneContainer />
            <IntroModal visible={session.modal_visible} onclose={on_close} />
        </Layout>
    }
}
