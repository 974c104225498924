/// Generates a uniform grid where every cell holds `value`.
pub fn uniform_grid(width: usize, height: usize, value: i32) -> Vec<Vec<i32>> {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");
    vec![vec![value; width]; height]
}

/// Generates a grid where cell (x, y) holds `1000 * y + x`, so every value
/// names its own coordinates. Linear in both axes, which the 5-tap kernel
/// reproduces exactly: blurring this grid is the identity away from borders.
pub fn coordinate_grid(width: usize, height: usize) -> Vec<Vec<i32>> {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");
    (0..height)
        .map(|y| (0..width).map(|x| (1000 * y + x) as i32).collect())
        .collect()
}
