// src/main.rs: Starbucks Gym Checker (Rust + Yew + WASM)
//
// Placeholder screen. The form renders but submitting it does nothing yet.

use gloo::console::log;
use yew::prelude::*;

const DRINK_TYPES: &[&str] = &[
    "Brewed Coffee",
    "Cappuccino",
    "Ice Brewed Coffee",
    "Espresso",
    "Frappuccino",
    "Caffè Latte",
    "White Chocolate Mocha",
    "Caramel Macchiato",
    "Java Chip",
];

const SIZES: &[&str] = &["Short", "Tall", "Grande", "Venti"];

const MILK_TYPES: &[&str] = &["Nonfat Milk", "2% Milk", "Soymilk", "Whole Milk"];

#[derive(Clone, Copy, PartialEq, Eq)]
struct WhipChoice {
    value: &'static str,
    label: &'static str,
}

const WHIP_CHOICES: &[WhipChoice] = &[
    WhipChoice { value: "yes", label: "Whipped cream" },
    WhipChoice { value: "no", label: "No whipped cream" },
];

fn select_field(id: &str, label: &str, options: &[&'static str]) -> Html {
    html! {
        <div class="field">
          <label for={id.to_string()}>{ label.to_string() }</label>
          <select id={id.to_string()} name={id.to_string()}>
            { for options.iter().map(|o| html! {
                <option value={*o}>{ *o }</option>
            }) }
          </select>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    // TODO: post the selections to the scoring service's /predict once it
    // accepts size, milk and whipped cream instead of a single prep string.
    let on_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        log!("Gym check is not wired up yet.");
    });

    html! {
      <div class="page">
        <header class="topbar">
          <div class="wrap">
            <span class="logo" aria-hidden="true">{ "🏋" }</span>
            <h1>{ "Starbucks Gym Checker" }</h1>
          </div>
        </header>

        <main class="wrap">
          <form class="panel" onsubmit={on_submit}>
            <p class="intro">{ "Pick your drink and see if it fits your workout." }</p>

            { select_field("drink", "Drink type", DRINK_TYPES) }
            { select_field("size", "Size", SIZES) }
            { select_field("milk", "Milk type", MILK_TYPES) }

            <fieldset class="field">
              <legend>{ "Whipped cream" }</legend>
              { for WHIP_CHOICES.iter().enumerate().map(|(i, c)| html! {
                  <label class="radio">
                    <input type="radio" name="whipped_cream" value={c.value} checked={i == 0} />
                    { c.label }
                  </label>
              }) }
            </fieldset>

            <button type="submit">{ "Check" }</button>
          </form>
        </main>
      </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(name: &str, options: &[&str]) {
        assert!(!options.is_empty(), "{name} is empty");
        let set: HashSet<_> = options.iter().collect();
        assert_eq!(set.len(), options.len(), "{name} has duplicates");
    }

    #[test]
    fn option_tables_are_filled_and_unique() {
        assert_unique("drink types", DRINK_TYPES);
        assert_unique("sizes", SIZES);
        assert_unique("milk types", MILK_TYPES);
        let whip: Vec<&str> = WHIP_CHOICES.iter().map(|c| c.value).collect();
        assert_unique("whipped cream", &whip);
    }

    #[test]
    fn whipped_cream_is_a_yes_no_choice() {
        let values: Vec<&str> = WHIP_CHOICES.iter().map(|c| c.value).collect();
        assert_eq!(values, ["yes", "no"]);
    }
}
