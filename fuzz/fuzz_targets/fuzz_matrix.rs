#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::Matrix;

fuzz_target!(|data: &[u8]| {
    // Arbitrary JSON must be rejected cleanly, never panic.
    let Ok(m) = serde_json::from_slice::<Matrix<f64>>(data) else {
        return;
    };
    assert_eq!(m.as_slice().len(), m.rows() * m.cols());

    // Split/assemble must round-trip exactly whenever the split is allowed.
    if let Ok(quadrants) = m.split() {
        let back = quadrants.assemble().unwrap();
        assert_eq!(back.as_slice().len(), m.as_slice().len());
        for (x, y) in back.as_slice().iter().zip(m.as_slice()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
});
