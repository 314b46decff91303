use crate::FRAME_MS;
use capable_site::content::CounterStat;
use capable_site::motion::counter_value;
use zoon::*;

/// Counts from zero up to the stat's target once `revealed` turns true.
pub fn animated_counter(
    stat: &'static CounterStat,
    revealed: &Mutable<bool>,
    duration_ms: u32,
) -> impl Element + use<> {
    let value = Mutable::new(0);
    let count_task = Task::start_droppable({
        let value = value.clone();
        let revealed = revealed.clone();
        async move {
            revealed.signal().wait_for(true).await;
            let started = js_sys::Date::now();
            loop {
                Timer::sleep(FRAME_MS).await;
                let elapsed = js_sys::Date::now() - started;
                value.set_neq(counter_value(stat.target, elapsed, duration_ms));
                if elapsed >= f64::from(duration_ms) {
                    break;
                }
            }
        }
    });
    El::new()
        .child_signal(value.signal().map(move |value| format!("{value}{}", stat.suffix)))
        .after_remove(move |_| drop(count_task))
}
