//! Hit notifications
//!
//! Blocks keep a list of listeners that are called synchronously, in
//! registration order, whenever a ball of a different color hits them.
//! Listeners are shared handles so one remover can watch every block.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::geometry::Rectangle;
use crate::sim::ball::Ball;
use crate::sim::color::Color;

/// Shared integer tally (score, remaining blocks, remaining balls)
#[derive(Debug, Clone, Default)]
pub struct Counter(Rc<Cell<i64>>);

impl Counter {
    pub fn new(value: i64) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    pub fn increase(&self, amount: i64) {
        self.0.set(self.0.get() + amount);
    }

    pub fn decrease(&self, amount: i64) {
        self.0.set(self.0.get() - amount);
    }

    pub fn value(&self) -> i64 {
        self.0.get()
    }
}

/// What a listener sees of the block being hit
#[derive(Debug, Clone, Copy)]
pub struct HitBlock {
    pub rect: Rectangle,
    pub color: Color,
}

/// One delivery of a hit to one listener
pub struct HitEvent<'a> {
    block: HitBlock,
    hitter: &'a mut Ball,
    remove_block: bool,
    unsubscribe: bool,
}

impl<'a> HitEvent<'a> {
    fn new(block: HitBlock, hitter: &'a mut Ball) -> Self {
        Self {
            block,
            hitter,
            remove_block: false,
            unsubscribe: false,
        }
    }

    pub fn block(&self) -> &HitBlock {
        &self.block
    }

    pub fn hitter(&self) -> &Ball {
        &*self.hitter
    }

    pub fn hitter_mut(&mut self) -> &mut Ball {
        &mut *self.hitter
    }

    /// Ask for the block to leave the game once notification finishes
    pub fn remove_block(&mut self) {
        self.remove_block = true;
    }

    /// Stop delivering this block's hits to the current listener
    pub fn unsubscribe(&mut self) {
        self.unsubscribe = true;
    }
}

/// Receives hit notifications from blocks
pub trait HitListener {
    fn hit_event(&mut self, event: &mut HitEvent<'_>);
}

pub type SharedHitListener = Rc<RefCell<dyn HitListener>>;

/// Wrap a listener so it can be registered on several blocks
pub fn shared<L: HitListener + 'static>(listener: L) -> SharedHitListener {
    Rc::new(RefCell::new(listener))
}

/// A block's registered listeners
#[derive(Default)]
pub struct HitNotifier {
    listeners: Vec<SharedHitListener>,
}

impl fmt::Debug for HitNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HitNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl HitNotifier {
    pub fn add(&mut self, listener: SharedHitListener) {
        self.listeners.push(listener);
    }

    /// Remove every registration of `listener` (compared by identity)
    pub fn remove(&mut self, listener: &SharedHitListener) {
        self.listeners.retain(|l| !Rc::ptr_eq(l, listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver a hit to every listener registered at the start of the call.
    ///
    /// Iterates a copy of the list, so listeners may unsubscribe during
    /// delivery. Returns true if any listener asked to remove the block.
    pub fn notify(&mut self, block: HitBlock, hitter: &mut Ball) -> bool {
        let snapshot = self.listeners.clone();
        let mut remove_block = false;

        for listener in &snapshot {
            let mut event = HitEvent::new(block, hitter);
            listener.borrow_mut().hit_event(&mut event);

            remove_block |= event.remove_block;
            if event.unsubscribe {
                self.remove(listener);
            }
        }

        remove_block
    }
}

/// Removes blocks that get hit and recolors the ball to match
#[derive(Debug)]
pub struct BlockRemover {
    remaining_blocks: Counter,
}

impl BlockRemover {
    pub fn new(remaining_blocks: Counter) -> Self {
        Self { remaining_blocks }
    }
}

impl HitListener for BlockRemover {
    fn hit_event(&mut self, event: &mut HitEvent<'_>) {
        let color = event.block().color;
        event.hitter_mut().set_color(color);
        event.unsubscribe();
        event.remove_block();
        self.remaining_blocks.decrease(1);
    }
}

/// Takes balls out of play (attached to the death zone)
#[derive(Debug)]
pub struct BallRemover {
    remaining_balls: Counter,
}

impl BallRemover {
    pub fn new(remaining_balls: Counter) -> Self {
        Self { remaining_balls }
    }
}

impl HitListener for BallRemover {
    fn hit_event(&mut self, event: &mut HitEvent<'_>) {
        event.hitter_mut().remove_from_game();
        self.remaining_balls.decrease(1);
    }
}

/// Scores each block once
#[derive(Debug)]
pub struct ScoreTrackingListener {
    score: Counter,
    points: i64,
}

impl ScoreTrackingListener {
    pub fn new(score: Counter, points: i64) -> Self {
        Self { score, points }
    }
}

impl HitListener for ScoreTrackingListener {
    fn hit_event(&mut self, event: &mut HitEvent<'_>) {
        event.unsubscribe();
        self.score.increase(self.points);
    }
}

/// Logs every hit
#[derive(Debug, Default)]
pub struct PrintingHitListener;

impl HitListener for PrintingHitListener {
    fn hit_event(&mut self, event: &mut HitEvent<'_>) {
        let rect = event.block().rect;
        log::info!(
            "A block was hit at ({:.1}, {:.1}) by ball {}",
            rect.upper_left.x,
            rect.upper_left.y,
            event.hitter().id()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn hit_block(color: Color) -> HitBlock {
        HitBlock {
            rect: Rectangle::new(Point::new(0.0, 0.0), 10.0, 10.0),
            color,
        }
    }

    fn ball() -> Ball {
        Ball::new(Point::new(-5.0, 5.0), 2.0, Color::BLACK)
    }

    /// Counts deliveries
    struct Tally(Counter);

    impl HitListener for Tally {
        fn hit_event(&mut self, _event: &mut HitEvent<'_>) {
            self.0.increase(1);
        }
    }

    #[test]
    fn test_counter_is_shared() {
        let a = Counter::new(3);
        let b = a.clone();
        b.decrease(1);
        a.increase(5);
        assert_eq!(a.value(), 7);
        assert_eq!(b.value(), 7);
    }

    #[test]
    fn test_notify_in_registration_order_with_unsubscribe() {
        let score = Counter::default();
        let deliveries = Counter::default();
        let mut notifier = HitNotifier::default();
        notifier.add(shared(ScoreTrackingListener::new(score.clone(), 5)));
        notifier.add(shared(Tally(deliveries.clone())));

        let mut ball = ball();
        assert!(!notifier.notify(hit_block(Color::LIGHT_GRAY), &mut ball));
        assert_eq!(score.value(), 5);
        assert_eq!(deliveries.value(), 1);
        // The score tracker unsubscribed itself, the tally stayed
        assert_eq!(notifier.len(), 1);

        notifier.notify(hit_block(Color::LIGHT_GRAY), &mut ball);
        assert_eq!(score.value(), 5);
        assert_eq!(deliveries.value(), 2);
    }

    #[test]
    fn test_unsubscribing_listener_does_not_skip_the_next() {
        let remaining = Counter::new(1);
        let deliveries = Counter::default();
        let mut notifier = HitNotifier::default();
        notifier.add(shared(BlockRemover::new(remaining.clone())));
        notifier.add(shared(Tally(deliveries.clone())));

        let mut ball = ball();
        let red = Color::rgb(255, 0, 0);
        assert!(notifier.notify(hit_block(red), &mut ball));
        assert_eq!(remaining.value(), 0);
        assert_eq!(deliveries.value(), 1);
        assert_eq!(ball.color(), red);
    }

    #[test]
    fn test_ball_remover() {
        let remaining = Counter::new(2);
        let mut notifier = HitNotifier::default();
        notifier.add(shared(BallRemover::new(remaining.clone())));

        let mut ball = ball();
        assert!(ball.is_alive());
        assert!(!notifier.notify(hit_block(Color::LIGHT_GRAY), &mut ball));
        assert!(!ball.is_alive());
        assert_eq!(remaining.value(), 1);
    }

    #[test]
    fn test_remove_by_identity() {
        let listener = shared(PrintingHitListener);
        let other = shared(PrintingHitListener);
        let mut notifier = HitNotifier::default();
        notifier.add(listener.clone());
        notifier.add(other.clone());
        notifier.remove(&listener);
        assert_eq!(notifier.len(), 1);
        notifier.remove(&other);
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_printing_listener_only_observes() {
        let deliveries = Counter::default();
        let mut notifier = HitNotifier::default();
        notifier.add(shared(PrintingHitListener));
        notifier.add(shared(Tally(deliveries.clone())));

        let mut ball = ball();
        for _ in 0..2 {
            assert!(!notifier.notify(hit_block(Color::LIGHT_GRAY), &mut ball));
        }
        // Stays subscribed and leaves the ball alone
        assert_eq!(notifier.len(), 2);
        assert_eq!(deliveries.value(), 2);
        assert!(ball.is_alive());
        assert_eq!(ball.color(), Color::BLACK);
    }
}
