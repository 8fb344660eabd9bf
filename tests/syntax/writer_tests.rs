//! Integration tests for the writer, exercised through parse/write cycles.

use std::path::PathBuf;

use epilog::syntax::{parse_unit, write_unit};

fn roundtrip(source: &str) -> String {
    let unit = parse_unit(source, &PathBuf::from("Test.java")).expect("parse failed");
    write_unit(&unit)
}

#[test]
fn normalized_output_is_a_fixpoint() {
    let source = r#"package com.example;

import java.util.List;

@RestController
@RequestMapping("/orders")
public class OrderController {

    private final OrderService service;

    @GetMapping("/{id}")
    public Order get(@PathVariable String id) {
        return service.get(id);
    }

    @PostMapping
    public Order create(@RequestBody Order order) {
        validate(order);
        return service.create(order);
    }
}
"#;
    let first = roundtrip(source);
    let second = roundtrip(&first);
    assert_eq!(first, second);
}

#[test]
fn multi_line_statement_keeps_inner_layout() {
    let source = "class C {\n    void f() {\n        if (x) {\n            y();\n        }\n    }\n}\n";
    let out = roundtrip(source);
    assert!(out.contains("        if (x) {\n"));
    assert!(out.contains("            y();\n"));
}

#[test]
fn raw_members_are_verbatim() {
    let source = "class C {\n    static {\n        init();\n    }\n\n    private int x;\n}\n";
    let out = roundtrip(source);
    assert!(out.contains("static {"));
    assert!(out.contains("init();"));
    assert!(out.contains("private int x;"));
}

#[test]
fn types_are_separated_by_blank_lines() {
    let out = roundtrip("class A {\n}\nclass B {\n}\n");
    assert!(out.contains("}\n\nclass B"));
}

#[test]
fn comment_inside_body_survives_roundtrip() {
    let source =
        "class C {\n    void f() {\n        // lookup\n        find();\n        use();\n    }\n}\n";
    let first = roundtrip(source);
    assert!(first.contains("// lookup"));
    let second = roundtrip(&first);
    assert_eq!(first, second);
}
