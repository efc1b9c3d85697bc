use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use cricket_terminal::player_fetch::parse_player_response_json;
use cricket_terminal::ui::format_stats::{
    batting_chart_points, batting_opponent_rows, bowling_chart_points, bowling_opponent_rows,
};

fn player_json(opponents: usize) -> String {
    let batting = (0..opponents)
        .map(|i| {
            format!(
                r#"{{"opponent":"Team {i}","matches":{m},"runs":{r},"average":41.5,"fifties":3,"hundreds":1,"high_score":"{hs}*"}}"#,
                m = 5 + i,
                r = 300 + i * 7,
                hs = 90 + i
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    let bowling = (0..opponents)
        .map(|i| {
            format!(
                r#"{{"opponent":"Team {i}","matches":{m},"wickets":{w},"best":"{b}/31","economy":4.2}}"#,
                m = 5 + i,
                w = 4 + i,
                b = i % 7
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    let format = format!(
        r#"{{"batting":{{"matches":40,"runs":2900,"high_score":"201*"}},"bowling":{{"wickets":30,"best":"5/40"}},"fielding":{{"catches":20}},"batting_vs_opponents":[{batting}],"bowling_vs_opponents":[{bowling}]}}"#
    );
    format!(
        r#"{{"result":{{"player_profile":{{"name":"Bench Player","origin":{{"teams":["A","B"]}}}},"formats":{{"Test":{format},"ODI":{format},"T20I":{format},"IPL":{format}}},"summary":"s","achievements":["a","b"],"note":"n"}}}}"#
    )
}

fn bench_player_parse(c: &mut Criterion) {
    let raw = player_json(12);
    c.bench_function("player_response_parse", |b| {
        b.iter(|| {
            let data = parse_player_response_json(black_box(&raw), "Bench Player").unwrap();
            black_box(data.formats.len());
        })
    });
}

fn bench_opponent_rows(c: &mut Criterion) {
    let raw = player_json(40);
    let data = parse_player_response_json(&raw, "Bench Player").unwrap();
    let test = &data.formats["Test"];
    c.bench_function("opponent_rows_and_charts", |b| {
        b.iter(|| {
            let batting = batting_opponent_rows(black_box(&test.batting_vs_opponents));
            let bowling = bowling_opponent_rows(black_box(&test.bowling_vs_opponents));
            let hs = batting_chart_points(&test.batting_vs_opponents);
            let bb = bowling_chart_points(&test.bowling_vs_opponents);
            black_box((batting.len(), bowling.len(), hs.len(), bb.len()));
        })
    });
}

criterion_group!(benches, bench_player_parse, bench_opponent_rows);
criterion_main!(benches);
