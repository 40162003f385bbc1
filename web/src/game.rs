use gloo::timers::callback::Interval;
use kaboom_core as game;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::storage::LocalBestTimes;
use crate::utils::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Activate(game::Coord2),
    ToggleFlag(game::Coord2),
    Tick,
    Restart,
    SelectDifficulty(game::Difficulty),
}

fn cell_classes(view: game::CellView, losing: bool) -> Classes {
    use game::CellView::*;

    let mut class = classes!(
        "cell",
        match view {
            Covered => classes!(),
            Flagged => classes!("flag"),
            Blank => classes!("open"),
            Number(count) => classes!("open", format!("num-{}", count)),
            Mine => classes!("open", "mine"),
        }
    );
    if losing {
        class.push("oops");
    }
    class
}

fn elapsed_counter(secs: u32) -> String {
    game::format_for_counter(i32::try_from(secs).unwrap_or(i32::MAX))
}

fn cell_label(view: game::CellView) -> String {
    use game::CellView::*;

    match view {
        Covered | Blank => String::new(),
        Flagged => "🚩".to_string(),
        Number(count) => count.to_string(),
        Mine => "💣".to_string(),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    coords: game::Coord2,
    view: game::CellView,
    #[prop_or_default]
    losing: bool,
    callback: Callback<Msg>,
}

#[function_component(CellButton)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        coords,
        view,
        losing,
        callback,
    } = props.clone();

    let class = cell_classes(view, losing);

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("{:?} activate", coords);
            callback.emit(Msg::Activate(coords));
        })
    };

    let oncontextmenu = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("{:?} flag", coords);
        callback.emit(Msg::ToggleFlag(coords));
    });

    html! {
        <td {class} {onclick} {oncontextmenu}>{cell_label(view)}</td>
    }
}

#[derive(Properties, Clone, Debug, PartialEq)]
pub(crate) struct GameProps {
    pub seed: u64,
    #[prop_or_default]
    pub difficulty: Option<game::Difficulty>,
}

pub(crate) struct GameView {
    session: game::GameSession<LocalBestTimes>,
    ticker: Option<Interval>,
    shown_secs: u32,
}

impl GameView {
    /// Runs the one-second ticker exactly while the session's timer runs.
    /// Dropping the `Interval` cancels it, so a finished or discarded round
    /// never receives another tick.
    fn sync_ticker(&mut self, ctx: &Context<Self>) {
        match (self.session.is_timer_running(), self.ticker.is_some()) {
            (true, false) => {
                let link = ctx.link().clone();
                self.ticker = Some(Interval::new(1000, move || link.send_message(Msg::Tick)));
                log::debug!("ticker started");
            }
            (false, true) => {
                self.ticker = None;
                log::debug!("ticker cancelled");
            }
            _ => {}
        }
    }

    fn activate(&mut self, coords: game::Coord2) -> bool {
        match self.session.activate(coords) {
            Ok(outcome) => {
                log::debug!("activate {:?}: {:?}", coords, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::error!("activate {:?} failed: {}", coords, err);
                false
            }
        }
    }

    fn toggle_flag(&mut self, coords: game::Coord2) -> bool {
        match self.session.toggle_flag(coords) {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::error!("flag {:?} failed: {}", coords, err);
                false
            }
        }
    }

    fn status_class(&self) -> &'static str {
        use game::GameStatus::*;
        match self.session.status() {
            NotStarted => "not-started",
            Playing => "in-progress",
            Won => "win",
            Lost => "lose",
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let (rows, cols) = self.session.grid().size();
        let losing_cell = self.session.losing_cell();
        let playable = !self.session.is_finished();
        let callback = ctx.link().callback(|msg: Msg| msg);

        html! {
            <table class={classes!("board", playable.then_some("playable"))}>
                {
                    for (0..rows).map(|row| html! {
                        <tr>
                            {
                                for (0..cols).map(|col| {
                                    let coords = (row, col);
                                    let view = self.session.grid()[coords].view();
                                    let losing = losing_cell == Some(coords);
                                    let callback = callback.clone();
                                    html! {
                                        <CellButton {coords} {view} {losing} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, difficulty } = ctx.props().clone();
        let difficulty = difficulty.unwrap_or_else(game::Difficulty::local_or_default);
        log::debug!("seed: {}, difficulty: {}", seed, difficulty);

        Self {
            session: game::GameSession::new(difficulty, seed, LocalBestTimes),
            ticker: None,
            shown_secs: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            Activate(coords) => self.activate(coords),
            ToggleFlag(coords) => self.toggle_flag(coords),
            Tick => {
                let secs = self.session.elapsed_secs();
                let changed = self.shown_secs != secs;
                self.shown_secs = secs;
                changed
            }
            Restart => {
                self.session.restart();
                true
            }
            SelectDifficulty(difficulty) => {
                difficulty.local_save();
                self.session.set_difficulty(difficulty);
                true
            }
        };

        self.sync_ticker(ctx);
        if updated {
            self.shown_secs = self.session.elapsed_secs();
        }
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let difficulty = self.session.difficulty();
        let mines_left = game::format_for_counter(self.session.mines_left());
        let elapsed_time = elapsed_counter(self.shown_secs);
        let best_time = game::format_best_time(self.session.best_time());

        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });
        let cb_select = ctx.link().batch_callback(|e: Event| {
            let select = e.target_unchecked_into::<HtmlSelectElement>();
            match select.value().parse::<game::Difficulty>() {
                Ok(difficulty) => Some(Msg::SelectDifficulty(difficulty)),
                Err(err) => {
                    log::warn!("unexpected difficulty {:?}: {}", select.value(), err);
                    None
                }
            }
        });

        html! {
            <div class="kaboom" oncontextmenu={Callback::from(|e: MouseEvent| e.prevent_default())}>
                <header>
                    <select onchange={cb_select}>
                        {
                            for game::Difficulty::ALL.into_iter().map(|option| html! {
                                <option value={option.id()} selected={option == difficulty}>
                                    {option.id()}
                                </option>
                            })
                        }
                    </select>
                    <small>{"best: "}{best_time}</small>
                </header>
                <nav>
                    <aside>{mines_left}</aside>
                    <span><button class={self.status_class()} onclick={cb_restart.clone()}/></span>
                    <aside>{elapsed_time}</aside>
                </nav>
                {self.view_board(ctx)}
                {
                    for self.session.end_message().map(|message| html! {
                        <dialog class="popup" open={true}>
                            <p>{message}</p>
                            <button onclick={cb_restart.clone()}>{"Play again"}</button>
                        </dialog>
                    })
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_classes_follow_render_state() {
        use game::CellView::*;

        let covered = cell_classes(Covered, false);
        assert!(covered.contains("cell"));
        assert!(!covered.contains("open"));

        assert!(cell_classes(Flagged, false).contains("flag"));
        assert!(cell_classes(Blank, false).contains("open"));
        assert!(cell_classes(Number(3), false).contains("num-3"));

        let losing = cell_classes(Mine, true);
        assert!(losing.contains("mine"));
        assert!(losing.contains("oops"));
    }

    #[test]
    fn labels_show_numbers_flags_and_mines() {
        use game::CellView::*;

        assert_eq!(cell_label(Covered), "");
        assert_eq!(cell_label(Blank), "");
        assert_eq!(cell_label(Number(8)), "8");
        assert_eq!(cell_label(Flagged), "🚩");
        assert_eq!(cell_label(Mine), "💣");
    }

    #[test]
    fn elapsed_counter_saturates_instead_of_wrapping() {
        assert_eq!(elapsed_counter(0), "000");
        assert_eq!(elapsed_counter(42), "042");
        assert_eq!(elapsed_counter(1000), "999");
        assert_eq!(elapsed_counter(u32::MAX), "999");
    }
}
