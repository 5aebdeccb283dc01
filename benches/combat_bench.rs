use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skirmish::battle::{find_flawless_attack_power, parse_battlefield, resolve_move, CombatEngine};
use skirmish::core::{CombatConfig, Point};

const CANONICAL: &str = "#######\n#.G...#\n#...EG#\n#.#.#G#\n#..G#E#\n#.....#\n#######";

const LONE_ELF: &str = "#########\n#G......#\n#.E.#...#\n#..##..G#\n#...##..#\n#...#...#\n#.G...G.#\n#.....G.#\n#########";

fn bench_simulate_canonical(c: &mut Criterion) {
    let field = parse_battlefield(CANONICAL, &CombatConfig::default()).unwrap();
    c.bench_function("simulate_canonical", |b| {
        b.iter(|| {
            let mut engine = CombatEngine::new(field.clone(), CombatConfig::default()).unwrap();
            engine.simulate().unwrap()
        })
    });
}

fn bench_resolve_move(c: &mut Criterion) {
    let field = parse_battlefield(LONE_ELF, &CombatConfig::default()).unwrap();
    let elf = field.unit_at(Point::new(2, 2)).unwrap().id;
    c.bench_function("resolve_move_lone_elf", |b| {
        b.iter(|| resolve_move(black_box(&field), black_box(elf)).unwrap())
    });
}

fn bench_search(c: &mut Criterion) {
    let field = parse_battlefield(LONE_ELF, &CombatConfig::default()).unwrap();
    c.bench_function("flawless_search_lone_elf", |b| {
        b.iter(|| find_flawless_attack_power(black_box(&field), &CombatConfig::default()).unwrap())
    });
}

criterion_group!(benches, bench_simulate_canonical, bench_resolve_move, bench_search);
criterion_main!(benches);
