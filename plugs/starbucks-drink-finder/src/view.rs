use yew::prelude::*;

use crate::api::{RecommendationItem, RecommendationResult};
use crate::images::image_for;

pub const NO_RECOMMENDATIONS: &str = "No recommendations found. Try a different description.";

#[derive(Debug, Clone, PartialEq)]
pub struct DrinkCard {
    pub name: String,
    pub image: &'static str,
    pub tags: Vec<String>,
    pub score: Option<String>,
}

/// What the result panel shows, decided without touching the DOM.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Error(String),
    Listing {
        banner: Option<String>,
        cards: Vec<DrinkCard>,
    },
    NoMatches {
        banner: Option<String>,
    },
}

/// Two decimals, with exact ties rounded away from zero (`0.125` -> `0.13`).
pub fn format_score(score: f64) -> String {
    format!("{:.2}", (score * 100.0).round() / 100.0)
}

impl From<&RecommendationItem> for DrinkCard {
    fn from(item: &RecommendationItem) -> Self {
        Self {
            name: item.beverage.clone(),
            image: image_for(&item.beverage),
            tags: item.tags.clone(),
            score: item.score.map(format_score),
        }
    }
}

impl ResultView {
    pub fn from_result(result: &RecommendationResult) -> Self {
        match result {
            RecommendationResult::Error(msg) => Self::Error(format!("Error: {msg}")),
            RecommendationResult::Success { message, items } if items.is_empty() => {
                Self::NoMatches {
                    banner: message.clone(),
                }
            }
            RecommendationResult::Success { message, items } => Self::Listing {
                banner: message.clone(),
                cards: items.iter().map(DrinkCard::from).collect(),
            },
        }
    }
}

pub fn result_panel(view: &ResultView) -> Html {
    let body = match view {
        ResultView::Error(text) => html! { <div class="err">{ text.clone() }</div> },
        ResultView::NoMatches { banner } => html! {
            <>
              { banner_block(banner.as_deref()) }
              <p class="empty">{ NO_RECOMMENDATIONS }</p>
            </>
        },
        ResultView::Listing { banner, cards } => html! {
            <>
              { banner_block(banner.as_deref()) }
              <div class="grid">
                { for cards.iter().map(drink_card) }
              </div>
            </>
        },
    };

    html! { <div class="results">{ body }</div> }
}

fn banner_block(banner: Option<&str>) -> Html {
    match banner {
        Some(text) => html! {
            <div class="banner"><p>{ text.to_string() }</p></div>
        },
        None => html! {},
    }
}

fn drink_card(card: &DrinkCard) -> Html {
    html! {
        <div class="card">
          <img class="drinkimg" src={card.image} alt={card.name.clone()} />
          <div class="cardhead">
            <h3>{ card.name.clone() }</h3>
          </div>
          <div class="cardbody">
            <div class="badges">
              { for card.tags.iter().map(|tag| html! {
                  <span class="badge">{ tag.clone() }</span>
              }) }
            </div>
            {
              if let Some(score) = &card.score {
                  html! {
                    <div class="score">
                      { "Match score: " }
                      <span class="scoreval">{ score.clone() }</span>
                    </div>
                  }
              } else {
                  html! {}
              }
            }
          </div>
        </div>
    }
}
