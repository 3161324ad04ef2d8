use advent2025_day_9::{part1, part2};
use divan::black_box;

const INPUT: &str = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";

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
