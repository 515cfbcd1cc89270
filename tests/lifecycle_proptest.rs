use lazy_slot::LazySlot;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
enum Op {
    Init(u16),
    Take,
    Reset,
    Mutate(u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u16>().prop_map(Op::Init),
        Just(Op::Take),
        Just(Op::Reset),
        any::<u16>().prop_map(Op::Mutate),
    ]
}

#[derive(Default)]
struct Counters {
    constructed: Cell<usize>,
    dropped: Cell<usize>,
}

struct Tracked {
    value: u16,
    counters: Rc<Counters>,
}

impl Tracked {
    fn new(value: u16, counters: &Rc<Counters>) -> Self {
        counters.constructed.set(counters.constructed.get() + 1);
        Self {
            value,
            counters: Rc::clone(counters),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counters.dropped.set(self.counters.dropped.get() + 1);
    }
}

proptest! {
    /// The slot behaves like an `Option` model and drops every value exactly once.
    #[test]
    fn test_slot_matches_option_model(ops in proptest::collection::vec(op(), 0..64)) {
        let counters = Rc::new(Counters::default());
        {
            let mut slot = LazySlot::<Tracked>::new();
            let mut model: Option<u16> = None;

            for op in ops {
                match op {
                    Op::Init(v) => {
                        // Only legal transition out of the empty state.
                        if model.is_none() {
                            slot.init_with(|| Tracked::new(v, &counters));
                            model = Some(v);
                        }
                    }
                    Op::Take => {
                        let taken = slot.take().map(|t| t.value);
                        prop_assert_eq!(taken, model.take());
                    }
                    Op::Reset => {
                        slot.reset();
                        model = None;
                    }
                    Op::Mutate(v) => {
                        if let Some(m) = model.as_mut() {
                            slot.get_mut().value = v;
                            *m = v;
                        }
                    }
                }

                prop_assert_eq!(slot.is_initialized(), model.is_some());
                prop_assert_eq!(slot.try_get().map(|t| t.value), model);
                let live = counters.constructed.get() - counters.dropped.get();
                prop_assert_eq!(live, usize::from(model.is_some()));
            }
        }
        prop_assert_eq!(counters.constructed.get(), counters.dropped.get());
    }

    #[test]
    fn test_forwarded_ops_match_inner(a in any::<i32>(), b in 1..i32::MAX) {
        let x = LazySlot::from(a);
        let y = LazySlot::from(b);

        prop_assert_eq!(&x % &y, a % b);
        prop_assert_eq!(&x / &y, a / b);
        prop_assert_eq!(x < y, a < b);
        prop_assert!(x == a);
        prop_assert_eq!(!&x, !a);
    }

    #[test]
    fn test_into_inner_returns_initialized_value(value in any::<Option<String>>()) {
        let slot = LazySlot::<String>::from(value.clone());
        prop_assert_eq!(slot.is_initialized(), value.is_some());
        prop_assert_eq!(slot.into_inner(), value);
    }
}

#[cfg(feature = "proptest")]
proptest! {
    #[test]
    fn test_arbitrary_slot_is_consistent(slot in any::<LazySlot<u8>>()) {
        let occupied = slot.is_initialized();
        prop_assert_eq!(slot.try_get().is_some(), occupied);
        prop_assert_eq!(slot.into_inner().is_some(), occupied);
    }
}

#[cfg(feature = "proptest")]
#[test]
fn test_arbitrary_slot_covers_both_states() {
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    let strategy = any::<LazySlot<u8>>();
    let mut runner = TestRunner::deterministic();
    let (mut empty, mut occupied) = (0, 0);

    for _ in 0..256 {
        let slot = strategy.new_tree(&mut runner).unwrap().current();
        if slot.is_initialized() {
            occupied += 1;
        } else {
            empty += 1;
        }
    }

    assert!(empty > 0, "no empty slot generated");
    assert!(occupied > 0, "no occupied slot generated");
}
