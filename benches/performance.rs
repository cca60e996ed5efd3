use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modmap::core::ProjectAnalyzer;
use modmap::parsers::python::PythonParser;
use std::path::Path;

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_analysis");

    let test_dir = std::env::temp_dir().join("modmap_bench");
    std::fs::create_dir_all(test_dir.join("pkg")).unwrap();

    for i in 0..20 {
        let content = format!(
            r#"
import os
import sys as system
from collections import OrderedDict

class Worker{}:
    def __init__(self):
        self.value = {}

    def process(self):
        return self.calculate() * 2

    def calculate(self):
        return helper(self.value)

def helper(v):
    return os.path.join(str(v), "x")

def main():
    worker = Worker{}()
    return worker.process()
"#,
            i, i, i
        );
        let name = if i % 2 == 0 {
            format!("mod_{}.py", i)
        } else {
            format!("pkg/mod_{}.py", i)
        };
        std::fs::write(test_dir.join(name), content).unwrap();
    }

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let analyzer = ProjectAnalyzer::new();
            let model = analyzer.analyze(black_box(&test_dir), "py").unwrap();
            black_box(model.len())
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| {
            let analyzer = ProjectAnalyzer::new().with_parallel(true);
            let model = analyzer.analyze(black_box(&test_dir), "py").unwrap();
            black_box(model.len())
        })
    });

    group.finish();
}

fn benchmark_single_file(c: &mut Criterion) {
    let source = r#"
import os

def f(x):
    g(x)
    obj.method()

def g(x):
    return os.path.join(x, "y")
"#;

    c.bench_function("parse_and_extract", |b| {
        let parser = PythonParser::new().unwrap();
        b.iter(|| {
            parser
                .parse_source(black_box(source), Path::new("bench.py"))
                .unwrap()
        })
    });
}

criterion_group!(benches, benchmark_analysis, benchmark_single_file);
criterion_main!(benches);
