//! Property-based tests for queue behaviour against a `VecDeque` model.

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use proptest::prelude::*;

    use crate::{BoundedQueue, QueueError, QueueState, UnboundedQueue};

    #[derive(Clone, Debug)]
    enum Op {
        Enqueue(i64),
        Dequeue,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-1000i64..1000i64).prop_map(Op::Enqueue),
            Just(Op::Dequeue),
        ]
    }

    fn script() -> impl Strategy<Value = Vec<Op>> {
        proptest::collection::vec(op(), 0..64)
    }

    proptest! {
        #[test]
        fn fifo_order(capacity in 1usize..16, values in proptest::collection::vec(any::<i64>(), 0..16)) {
            let values: Vec<i64> = values.into_iter().take(capacity).collect();
            let mut q = BoundedQueue::new(capacity);
            for v in &values {
                prop_assert!(q.enqueue(*v).is_ok());
            }
            prop_assert_eq!(q.size(), values.len());
            for v in &values {
                prop_assert_eq!(q.dequeue(), Ok(*v));
            }
            prop_assert!(q.is_empty());
        }

        #[test]
        fn bounded_matches_model(capacity in 0usize..8, ops in script()) {
            let mut q = BoundedQueue::new(capacity);
            let mut model: VecDeque<i64> = VecDeque::new();

            for op in ops {
                match op {
                    Op::Enqueue(v) => {
                        if model.len() == capacity {
                            prop_assert_eq!(
                                q.enqueue(v),
                                Err(QueueError::Full { capacity, rejected: v })
                            );
                        } else {
                            prop_assert_eq!(q.enqueue(v), Ok(()));
                            model.push_back(v);
                        }
                    }
                    Op::Dequeue => {
                        let expected = model.pop_front().ok_or(QueueError::Empty);
                        prop_assert_eq!(q.dequeue(), expected);
                    }
                }

                prop_assert_eq!(q.size(), model.len());
                prop_assert_eq!(q.is_empty(), model.is_empty());
                prop_assert_eq!(q.is_full(), model.len() == capacity);
                prop_assert_eq!(q.peek(), model.front());
                prop_assert!(q.iter().eq(model.iter()));

                let state = q.state();
                if model.is_empty() {
                    prop_assert_eq!(state, QueueState::Empty);
                } else if model.len() == capacity {
                    prop_assert_eq!(state, QueueState::Full);
                } else {
                    prop_assert_eq!(state, QueueState::Partial);
                }
            }
        }

        #[test]
        fn bounded_agrees_with_unbounded(ops in script()) {
            // Large enough that no script can fill it
            let mut bounded = BoundedQueue::new(64);
            let mut unbounded = UnboundedQueue::new();

            for op in ops {
                match op {
                    Op::Enqueue(v) => {
                        prop_assert!(bounded.enqueue(v).is_ok());
                        unbounded.enqueue(v);
                    }
                    Op::Dequeue => {
                        prop_assert_eq!(bounded.dequeue(), unbounded.dequeue());
                    }
                }
                prop_assert_eq!(bounded.size(), unbounded.size());
                prop_assert_eq!(bounded.to_string(), unbounded.to_string());
            }
        }
    }
}
