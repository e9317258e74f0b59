// Copyright (c) 2025 - Cowboy AI, LLC.

use proptest::prelude::*;

use cim_memo::{compose, constant, identity, memoize, Memo};

fn add_five(x: i64) -> i64 {
    x.wrapping_add(5)
}

fn triple(x: i64) -> i64 {
    x.wrapping_mul(3)
}

fn offset(x: i64) -> i64 {
    x.wrapping_sub(7)
}

proptest! {
    #[test]
    fn adapter_agrees_with_wrapped_function(x in any::<i64>()) {
        let mut adapter = Memo::new(add_five);
        prop_assert_eq!(adapter.call(x), add_five(x));
        // And again, now answered from the cache.
        prop_assert_eq!(adapter.call(x), add_five(x));
    }

    #[test]
    fn fresh_adapters_are_interchangeable(x in any::<i64>(), y in any::<i64>()) {
        let mut first = Memo::new(triple);
        let mut second = Memo::new(triple);
        prop_assert_eq!(first.call(x), second.call(x));
        prop_assert_eq!(first.call(y), second.call(y));
    }

    #[test]
    fn composition_respects_identity(x in any::<i64>()) {
        let mut after = compose(identity, add_five);
        let mut before = compose(add_five, identity);
        prop_assert_eq!(after(x), add_five(x));
        prop_assert_eq!(before(x), add_five(x));
    }

    #[test]
    fn composition_is_associative(x in any::<i64>()) {
        let mut left = compose(compose(add_five, triple), offset);
        let mut right = compose(add_five, compose(triple, offset));
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn memoized_closures_compose_like_plain_functions(x in any::<i64>()) {
        let mut plain = compose(add_five, triple);
        let mut cached = compose(memoize(add_five), triple);
        prop_assert_eq!(cached(x), plain(x));
        prop_assert_eq!(cached(x), plain(x));
    }

    #[test]
    fn constant_ignores_its_argument(x in any::<i64>(), y in any::<i64>()) {
        let always = constant(42i64);
        prop_assert_eq!(always(x), 42);
        prop_assert_eq!(always(y), 42);
    }
}
