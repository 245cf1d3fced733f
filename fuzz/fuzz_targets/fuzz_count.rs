#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use decodeways_core::batch::count_all;
use decodeways_core::counter::ClusterCounter;

fuzz_target!(|data: &[u8]| {
    // Should not panic, and both routes must agree
    let owned = ClusterCounter::new().count(data);
    let batched = count_all(&[data]).pop().expect("one result per input");
    assert_eq!(owned, batched);

    if let Ok(ways) = owned {
        assert!(ways >= BigUint::from(1u32));
    }
});
