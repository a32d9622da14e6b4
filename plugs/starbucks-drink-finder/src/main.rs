// src/main.rs: Starbucks Drink Finder (Rust + Yew + WASM)
mod api;
mod config;
mod images;
mod state;
mod view;

use gloo::console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::fetch_recommendations;
use crate::config::ApiConfig;
use crate::state::{FinderAction, FinderState};
use crate::view::{result_panel, ResultView};

#[function_component(App)]
fn app() -> Html {
    let config = use_state(ApiConfig::from_dom);
    let input = use_state(String::new);
    let finder = use_reducer(FinderState::default);

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(el.value());
        })
    };

    let on_submit = {
        let input = input.clone();
        let finder = finder.clone();
        let config = config.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(query) = finder.accept(input.as_str()) else {
                return;
            };

            finder.dispatch(FinderAction::Begin);

            let finder = finder.clone();
            let url = config.recommend_url();
            spawn_local(async move {
                let outcome = fetch_recommendations(&url, &query).await;
                if let Err(e) = &outcome {
                    error!(format!("Error calling API: {e}"));
                }
                finder.dispatch(FinderAction::Finish(outcome));
            });
        })
    };

    let loading = finder.is_loading();

    let results = match finder.displayed() {
        Some(result) => result_panel(&ResultView::from_result(result)),
        None => html! {},
    };

    html! {
      <div class="page">
        <header class="topbar">
          <div class="wrap">
            <span class="logo" aria-hidden="true">{ "☕" }</span>
            <h1>{ "Starbucks Drink Finder" }</h1>
          </div>
        </header>

        <main class="wrap">
          <div class="panel">
            <p class="intro">
              { "Describe what you're in the mood for, and we'll recommend the perfect Starbucks drink for you." }
            </p>

            <form class="controls" onsubmit={on_submit}>
              <input
                type="text"
                value={(*input).clone()}
                oninput={on_input}
                placeholder="I want something sweet and refreshing..."
              />
              <button type="submit" disabled={loading}>
                {
                  if loading {
                      html! { <><span class="spinner" aria-hidden="true"></span>{ "Finding..." }</> }
                  } else {
                      html! { <>{ "Get Recommendations" }</> }
                  }
                }
              </button>
            </form>

            { results }
          </div>
        </main>

        <footer class="footer">
          <p>{ "Powered by AI • Find your perfect Starbucks drink" }</p>
        </footer>
      </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
