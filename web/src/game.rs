use crate::utils::*;
use gloo::timers::callback::{Interval, Timeout};
use pairs_core as game;
use serde::{Deserialize, Serialize};
use yew::html::Scope;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Flip(game::CardIndex),
    Tick,
    Resolve(game::ScheduledAction),
    Start,
    Restart,
}

/// Delivers controller timers back into the component as messages.
pub(crate) struct YewScheduler {
    link: Scope<GameView>,
}

impl game::Scheduler for YewScheduler {
    type Interval = Interval;

    fn start_interval(&mut self) -> Interval {
        let link = self.link.clone();
        Interval::new(game::TICK_INTERVAL_MS, move || link.send_message(Msg::Tick))
    }

    fn schedule(&mut self, action: game::ScheduledAction) {
        let link = self.link.clone();
        // stale actions are filtered by generation, so the timeout can outlive its board
        Timeout::new(game::REVEAL_DELAY_MS, move || {
            link.send_message(Msg::Resolve(action))
        })
        .forget();
    }
}

fn card_classes(face: game::CardFace) -> Classes {
    use game::CardFace::*;

    classes!(
        "card",
        match face {
            Hidden => classes!(),
            Flipped(_) => classes!("flipped"),
            Matched(_) => classes!("flipped", "matched"),
        }
    )
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    index: game::CardIndex,
    face: game::CardFace,
    callback: Callback<game::CardIndex>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        index,
        face,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", index);
        callback.emit(index);
    });
    let glyph = face.symbol().map(game::Symbol::glyph).unwrap_or_default();

    html! {
        <div class={card_classes(face)} {onclick}>
            <div class="card-front"/>
            <div class="card-back">{glyph}</div>
        </div>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: game::GameConfig,
    /// Force a seed instead of random
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    controller: game::GameController<YewScheduler>,
    seed: u64,
    forced_seed: bool,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = ctx.props().clone();
        let forced_seed = seed.is_some();
        let seed = seed.unwrap_or_else(js_random_seed);
        let scheduler = YewScheduler {
            link: ctx.link().clone(),
        };

        Self {
            controller: game::GameController::new(
                config,
                game::RandomBoardGenerator::new(seed),
                scheduler,
            ),
            seed,
            forced_seed,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Flip(index) => {
                let outcome = self.controller.flip(index);
                log::debug!("flip card {}: {:?}", index, outcome);
                outcome.has_update()
            }
            Tick => self.controller.tick(),
            Resolve(action) => {
                let outcome = self.controller.resolve(action);
                log::trace!("resolved {:?}: {:?}", action.kind, outcome);
                outcome.has_update()
            }
            Start => self.controller.start_game(),
            Restart => {
                self.seed = next_seed(self.seed, self.forced_seed);
                log::debug!("restart with seed {}", self.seed);
                self.controller.restart_game(game::RandomBoardGenerator::new(self.seed));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let view = self.controller.view();
        let cb_start = ctx.link().callback(|_: MouseEvent| Start);
        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);
        let cb_flip = ctx.link().callback(Flip);

        html! {
            <div class="pairs">
                <div class="controls">
                    <button
                        class={classes!("start", (!view.start_enabled).then_some("disabled"))}
                        disabled={!view.start_enabled}
                        onclick={cb_start}
                    >
                        {"Start"}
                    </button>
                    <div class="stats">
                        <div class="moves">{view.moves.to_string()}</div>
                        <div class="timer">{view.time.to_string()}</div>
                    </div>
                    <button class="restart" onclick={cb_restart}>{"Restart"}</button>
                </div>
                <div class={classes!("board-container", view.locked.then_some("flipped"))}>
                    <div class="board" style={board_style(view.dimension)}>
                        {
                            for (0..).zip(view.faces.iter().copied()).map(|(index, face): (game::CardIndex, _)| {
                                let callback = cb_flip.clone();
                                html! {
                                    <CardView key={index} {index} {face} {callback}/>
                                }
                            })
                        }
                    </div>
                    <div class="win">
                        if let Some(win) = view.win {
                            <span class="win-text">{win.to_string()}</span>
                        }
                    </div>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::Symbol;

    #[test]
    fn hidden_card_has_no_face_classes() {
        let classes = card_classes(game::CardFace::Hidden);
        assert!(classes.contains("card"));
        assert!(!classes.contains("flipped"));
    }

    #[test]
    fn matched_card_stays_flipped() {
        let classes = card_classes(game::CardFace::Matched(Symbol::Mango));
        assert!(classes.contains("flipped"));
        assert!(classes.contains("matched"));

        let classes = card_classes(game::CardFace::Flipped(Symbol::Mango));
        assert!(classes.contains("flipped"));
        assert!(!classes.contains("matched"));
    }
}
