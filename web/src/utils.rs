/// Seed from JavaScript's Math.random, wasm only
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let mut bytes = [0u8; 8];
    for byte in &mut bytes {
        *byte = (256. * random()) as u8;
    }
    u64::from_be_bytes(bytes)
}

/// Seed for the next board: forced seeds advance deterministically, otherwise a fresh random one is drawn.
pub(crate) fn next_seed(current: u64, forced: bool) -> u64 {
    if forced {
        current.wrapping_add(1)
    } else {
        js_random_seed()
    }
}

/// Inline grid style for a square board.
pub(crate) fn board_style(dimension: pairs_core::Coord) -> String {
    format!("grid-template-columns: repeat({}, auto)", dimension)
}
