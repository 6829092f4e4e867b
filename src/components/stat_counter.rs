use log::info;
use web_sys::Element;
use yew::prelude::*;

use crate::counter::{AnimationRun, CounterSpec, CounterTrigger, TRIGGER_THRESHOLD};
use crate::dom::{self, FrameLoop, Observer};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    /// Raw `data-target` value, e.g. `"50000"` or `"98.5"`.
    pub target: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct HeroStatsProps {
    pub stats: &'static [Stat],
}

/// The `.hero__stats` strip. Counting starts the first time half of it is on
/// screen and never again for this mount.
#[function_component(HeroStats)]
pub fn hero_stats(props: &HeroStatsProps) -> Html {
    let container = use_node_ref();
    let started = use_state(|| false);

    {
        let container = container.clone();
        let started = started.setter();
        use_effect_with_deps(
            move |_| {
                let mut trigger = CounterTrigger::new();
                let observer = container.cast::<Element>().and_then(|el| {
                    let observer = Observer::new(TRIGGER_THRESHOLD, None, move |_, observer| {
                        if trigger.fire(true) {
                            info!("Hero stats in view, starting counters");
                            started.set(true);
                            observer.disconnect();
                        }
                    })?;
                    observer.observe(&el);
                    Some(observer)
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div class="hero__stats" ref={container}>
            { for props.stats.iter().map(|stat| html! {
                <StatCounter key={stat.target} stat={*stat} started={*started} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub stat: Stat,
    pub started: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let spec = CounterSpec::parse(props.stat.target);
    let text = use_state(|| {
        spec.map(|s| s.initial_text())
            .unwrap_or_else(|| props.stat.target.to_string())
    });
    let frame_loop = use_mut_ref(|| None::<FrameLoop>);

    {
        let text = text.setter();
        use_effect_with_deps(
            move |(started, spec)| {
                if let (true, Some(spec)) = (*started, *spec) {
                    let run = AnimationRun::start(spec, dom::now_ms());
                    *frame_loop.borrow_mut() = Some(FrameLoop::start(move |now| {
                        let frame = run.frame(now);
                        text.set(frame.text);
                        !frame.finished
                    }));
                }
                || ()
            },
            (props.started, spec),
        );
    }

    html! {
        <div class="stat" data-target={props.stat.target}>
            <span class="stat__number">{ (*text).clone() }</span>
            <span class="stat__label">{ props.stat.label }</span>
        </div>
    }
}
