#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    let comparisons = merge_insertion::sort(&mut v);

    assert!(v.windows(2).all(|w| w[0] <= w[1]));
    assert!(comparisons <= merge_insertion::ford_johnson_bound(v.len()));

    let mut expected = data.to_vec();
    expected.sort();
    assert_eq!(v, expected);
});
