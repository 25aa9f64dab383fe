use criterion::{black_box, criterion_group, criterion_main, Criterion};

use civicdesk::records::{Citizen, CitizenStatus};
use civicdesk::table::{escape_html, present, render_table, Column, PageCursor};

fn sample_citizens(count: usize) -> Vec<Citizen> {
    (0..count)
        .map(|i| Citizen {
            id: format!("USR-{:04}", 1000 + i),
            full_name: format!("Citizen {}", i),
            email: format!("citizen{}@example.com", i),
            phone: "+91-9876543210".to_string(),
            status: CitizenStatus::Active,
            joined_at: "2026-01-15".parse().unwrap(),
        })
        .collect()
}

fn citizen_columns() -> Vec<Column<Citizen>> {
    vec![
        Column::field("Citizen ID", |c: &Citizen| c.id.clone()),
        Column::field("Name", |c: &Citizen| c.full_name.clone()),
        Column::render("Status", |c: &Citizen| {
            format!("<span class=\"badge\">{}</span>", c.status)
        }),
        Column::blank("Actions"),
    ]
}

fn bench_present(c: &mut Criterion) {
    let citizens = sample_citizens(100);
    let columns = citizen_columns();

    c.bench_function("present_100_rows", |b| {
        b.iter(|| {
            present(
                black_box(&citizens),
                black_box(&columns),
                false,
                PageCursor::new(1, 10),
            )
        })
    });

    let page = sample_citizens(10);
    c.bench_function("present_single_page", |b| {
        b.iter(|| {
            present(
                black_box(&page),
                black_box(&columns),
                false,
                PageCursor::new(1, 10),
            )
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let citizens = sample_citizens(10);
    let columns = citizen_columns();
    let view = present(&citizens, &columns, false, PageCursor::new(2, 10));

    c.bench_function("render_table_page", |b| {
        b.iter(|| render_table(black_box(&view), "/users"))
    });
}

fn bench_escape(c: &mut Criterion) {
    let clean = "Rahul Kumar <rahul.k@example.com>";
    c.bench_function("escape_html", |b| b.iter(|| escape_html(black_box(clean))));
}

criterion_group!(benches, bench_present, bench_render, bench_escape);
criterion_main!(benches);
