use crate::types::timeline::Timeline;
use crate::types::window::WindowRecord;
use num_integer::Integer;

/// Reduces one beat window to the coarsest denominator that keeps every note in place.
///
/// The step `g` is the gcd of every occupied index together with the window
/// length. Every `g`-th slot is kept and the denominator becomes `len / g`.
pub fn reduce_window(window: &[String]) -> WindowRecord {
    let occupied: Vec<usize> = window
        .iter()
        .enumerate()
        .filter(|(_, phrase)| !phrase.is_empty())
        .map(|(index, _)| index)
        .collect();

    let step = if occupied.is_empty() {
        // nothing but rests: one empty slot spanning the window
        window.len()
    } else {
        occupied
            .iter()
            .fold(window.len(), |acc, &index| acc.gcd(&index))
    };
    // an empty window has len 0, step_by() panics on 0
    let step = step.max(1);

    let phrases = window.iter().step_by(step).cloned().collect();
    WindowRecord::new((window.len() / step).max(1), phrases)
}

pub fn reduce(timeline: &Timeline) -> Vec<WindowRecord> {
    timeline.windows().map(reduce_window).collect()
}
