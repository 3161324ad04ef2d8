use advent2025_day_4::{part1, part2};
use divan::black_box;

const INPUT: &str = "..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";

fn main() {
    divan::main();
}

#[divan::bench]
fn part1() {
    part1::process(black_box(INPUT)).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(black_box(INPUT)).unwrap();
}
