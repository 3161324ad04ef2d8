use advent2025_day_2::part2;
use divan::black_box;

const INPUT: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,
1698522-1698528,446443-446449,38593856-38593862,565653-565659,
824824821-824824827,2121212118-2121212124";

fn main() {
    divan::main();
}

#[divan::bench]
fn part2() {
    part2::process(black_box(INPUT)).unwrap();
}
