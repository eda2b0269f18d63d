use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

// Browsers round intersectionRatio; a crossing can report just under the threshold.
const RATIO_TOLERANCE: f64 = 1e-3;
const STEP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// One-shot latch behind the entrance animations. Once revealed it stays
/// revealed for the rest of the mount.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    state: RevealState,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            state: RevealState::Hidden,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds one intersection report. Returns `true` only for the report
    /// that flips the latch.
    ///
    /// `viewport_share` is the visible height over the viewport height. A
    /// section taller than the viewport can never reach a large enough
    /// `ratio`, so covering `threshold` of the viewport also counts.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, viewport_share: f64) -> bool {
        if self.is_revealed() || !is_intersecting {
            return false;
        }
        let seen = ratio.max(viewport_share);
        if seen + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }
}

/// Observer thresholds: every hundredth below `threshold`, then `threshold`.
/// The finer steps keep reports coming while a tall section scrolls in.
pub fn threshold_steps(threshold: f64) -> Vec<f64> {
    let mut steps: Vec<f64> = (0..)
        .map(|i| i as f64 * STEP)
        .take_while(|step| step + RATIO_TOLERANCE < threshold)
        .collect();
    steps.push(threshold);
    steps
}

fn viewport_share(entry: &IntersectionObserverEntry) -> f64 {
    match entry.root_bounds() {
        Some(root) if root.height() > 0.0 => entry.intersection_rect().height() / root.height(),
        _ => 0.0,
    }
}

/// Live `IntersectionObserver` on one element. Dropping it disconnects the
/// observer and frees the callback.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ObserverGuard {
    pub fn watch(
        element: &Element,
        threshold: f64,
        on_reveal: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let mut latch = RevealLatch::new(threshold);
        let threshold = latch.threshold();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let share = viewport_share(&entry);
                    if latch.observe(entry.is_intersecting(), entry.intersection_ratio(), share) {
                        observer.disconnect();
                        on_reveal();
                        break;
                    }
                }
            },
        );

        let steps: Array = threshold_steps(threshold)
            .into_iter()
            .map(JsValue::from_f64)
            .collect();
        let init = IntersectionObserverInit::new();
        init.set_threshold(&steps);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Flips to `true` the first time the referenced element is at least
/// `threshold` visible.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let guard = match node.cast::<Element>() {
                    Some(element) => {
                        let on_reveal = revealed.clone();
                        match ObserverGuard::watch(&element, threshold, move || on_reveal.set(true)) {
                            Ok(guard) => Some(guard),
                            Err(e) => {
                                // No observer support: show the section rather than hide it forever.
                                log::debug!("IntersectionObserver unavailable: {:?}", e);
                                revealed.set(true);
                                None
                            }
                        }
                    }
                    None => None,
                };
                move || drop(guard)
            },
            node,
        );
    }

    *revealed
}

/// Reveal in the first effect after mount, for content that starts on screen.
#[hook]
pub fn use_reveal_on_mount() -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                revealed.set(true);
                || ()
            },
            (),
        );
    }

    *revealed
}

/// Transition classes shared by every revealed block.
pub fn reveal_classes(revealed: bool) -> &'static str {
    if revealed {
        "reveal is-visible"
    } else {
        "reveal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let latch = RevealLatch::new(0.2);
        assert_eq!(latch.state(), RevealState::Hidden);
        assert!(!latch.is_revealed());
    }

    #[test]
    fn reveals_once_threshold_is_reached() {
        let mut latch = RevealLatch::new(0.2);
        assert!(!latch.observe(true, 0.05, 0.0));
        assert!(!latch.observe(false, 0.0, 0.0));
        assert!(latch.observe(true, 0.2, 0.0));
        assert!(latch.is_revealed());
    }

    #[test]
    fn transitions_at_most_once() {
        let mut latch = RevealLatch::new(0.1);
        let flips = [
            (true, 0.5),
            (false, 0.0),
            (true, 1.0),
            (true, 0.1),
            (false, 0.0),
        ]
        .into_iter()
        .filter(|(intersecting, ratio)| latch.observe(*intersecting, *ratio, 0.0))
        .count();
        assert_eq!(flips, 1);
        // Scrolling away never hides it again.
        assert!(latch.is_revealed());
    }

    #[test]
    fn not_intersecting_never_reveals() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(false, 0.0, 0.0));
        assert!(latch.observe(true, 0.0, 0.0));
    }

    #[test]
    fn tolerates_rounded_ratios() {
        let mut latch = RevealLatch::new(0.2);
        assert!(latch.observe(true, 0.1999, 0.0));
    }

    #[test]
    fn tall_section_reveals_once_it_covers_the_viewport_share() {
        // 6000px of content in a 500px viewport tops out near 0.083.
        let mut latch = RevealLatch::new(0.1);
        assert!(!latch.observe(true, 0.005, 0.06));
        assert!(latch.observe(true, 0.01, 0.12));
    }

    #[test]
    fn viewport_share_needs_an_intersection() {
        let mut latch = RevealLatch::new(0.1);
        assert!(!latch.observe(false, 0.0, 1.0));
    }

    #[test]
    fn steps_climb_to_the_threshold() {
        let steps = threshold_steps(0.1);
        assert_eq!(steps.len(), 11);
        assert_eq!(steps.first(), Some(&0.0));
        assert_eq!(steps.last(), Some(&0.1));
        assert!(steps.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(threshold_steps(0.0), vec![0.0]);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealLatch::new(1.5).threshold(), 1.0);
        assert_eq!(RevealLatch::new(-0.3).threshold(), 0.0);
        assert_eq!(RevealLatch::new(f64::NAN).threshold(), 0.0);
    }

    #[test]
    fn each_mount_starts_over() {
        let mut first = RevealLatch::new(0.2);
        assert!(first.observe(true, 0.9, 0.0));
        let second = RevealLatch::new(0.2);
        assert!(!second.is_revealed());
    }

    #[test]
    fn classes_follow_the_flag() {
        assert_eq!(reveal_classes(false), "reveal");
        assert_eq!(reveal_classes(true), "reveal is-visible");
    }
}
