//! End-to-end pass tests: parse, instrument, write.

use std::path::PathBuf;

use epilog::pass::{MARKER, run_pass};
use epilog::syntax::{parse_unit, write_unit};

const SHOP: &str = r#"package com.example.shop;

import java.util.List;

@RestController
@RequestMapping("/products")
public class ProductController {

    private final ProductService service;

    @GetMapping("/{id}")
    public Product get(@PathVariable String id) {
        return service.get(id);
    }

    @PostMapping
    public Product create(@RequestBody Product p) {
        return service.create(p);
    }

    @GetMapping("/expensive-search")
    public List<Product> search(@RequestParam String q) {
        return service.search(q);
    }

    private Product enrich(Product p) {
        return p;
    }
}
"#;

fn parse(source: &str) -> epilog::model::CompilationUnit {
    parse_unit(source, &PathBuf::from("Test.java")).expect("parse failed")
}

#[test]
fn controller_methods_are_instrumented() {
    let mut units = vec![parse(SHOP)];
    let stats = run_pass(&mut units);

    assert_eq!(stats.seen, 4);
    assert_eq!(stats.eligible, 4);
    assert_eq!(stats.mapped, 3);
    assert_eq!(stats.injected, 3);
    assert_eq!(stats.skipped_no_mapping, 1);
    assert!(stats.is_conserved());

    let out = write_unit(&units[0]);
    assert!(out.contains("@lombok.extern.slf4j.Slf4j"));
    assert!(out.contains("org.slf4j.MDC.put(\"path\", \"/products/{id}\");"));
    assert!(out.contains("org.slf4j.MDC.put(\"opType\", \"WRITE\");"));
    assert!(out.contains("org.slf4j.MDC.put(\"opType\", \"SEARCH_EXPENSIVE\");"));
    assert!(out.contains("log.info(\"api_call begin\");"));
    // Original statements survive, after the injected block.
    assert!(out.contains("return service.get(id);"));
}

#[test]
fn injected_block_precedes_original_statements() {
    let mut units = vec![parse(SHOP)];
    run_pass(&mut units);

    let get = units[0]
        .types[0]
        .methods()
        .find(|m| m.name == "get")
        .expect("get method");
    let body = get.body.as_ref().expect("body");
    assert_eq!(body.statements.len(), 2);
    assert!(body.statements[0].contains(MARKER));
    assert_eq!(body.statements[1].text, "return service.get(id);");
}

#[test]
fn written_output_survives_a_second_run() {
    let mut units = vec![parse(SHOP)];
    run_pass(&mut units);
    let first = write_unit(&units[0]);

    let mut reparsed = vec![parse(&first)];
    let stats = run_pass(&mut reparsed);
    assert_eq!(stats.injected, 0);
    assert_eq!(stats.skipped_already, 3);
    assert!(stats.is_conserved());
    assert_eq!(write_unit(&reparsed[0]), first);
}

#[test]
fn unrelated_unit_is_untouched() {
    let source =
        "package p;\n\npublic class Helper {\n    public int f() {\n        return 1;\n    }\n}\n";
    let mut units = vec![parse(source)];
    let before = units.clone();
    let stats = run_pass(&mut units);
    assert_eq!(stats.injected, 0);
    assert_eq!(stats.skipped_ineligible, 1);
    assert_eq!(units, before);
}

#[test]
fn stats_accumulate_across_units() {
    let mut units = vec![
        parse(SHOP),
        parse("package p;\n\nclass Plain {\n    void f() {\n    }\n}\n"),
    ];
    let stats = run_pass(&mut units);
    assert_eq!(stats.seen, 5);
    assert_eq!(stats.skipped_ineligible, 1);
    assert!(stats.is_conserved());
}

#[test]
fn report_reflects_the_run() {
    let mut units = vec![parse(SHOP)];
    let stats = run_pass(&mut units);
    let report = stats.report();
    assert!(report.contains("[PROC SUMMARY]"));
    assert!(report.contains("seenMethods      = 4"));
    assert!(report.contains("injected         = 3"));
    assert!(report.contains("skippedNoMapping = 1"));
}
