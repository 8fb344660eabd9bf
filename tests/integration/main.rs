//! Full-pipeline integration tests: discovery, parsing, instrumentation,
//! and writing, driven through the public facade.

use std::fs;
use std::path::PathBuf;

use epilog::pass::MARKER;
use epilog::runtime::{Driver, instrument_sources};

const ORDER_CONTROLLER: &str = r#"package com.example.orders;

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
        return service.create(order);
    }

    @GetMapping("/expensive-search")
    public List<Order> search(@RequestParam String q) {
        return service.search(q);
    }
}
"#;

const PLAIN_SERVICE: &str = r#"package com.example.orders;

public class OrderService {

    public Order get(String id) {
        return find(id);
    }
}
"#;

fn sources() -> Vec<(PathBuf, String)> {
    vec![
        (
            PathBuf::from("OrderController.java"),
            ORDER_CONTROLLER.to_string(),
        ),
        (PathBuf::from("OrderService.java"), PLAIN_SERVICE.to_string()),
    ]
}

#[test]
fn read_endpoint_gets_full_metadata() {
    let (units, stats) = instrument_sources(&sources());
    assert_eq!(stats.injected, 3);

    let controller = &units[0].types[0];
    let get = controller
        .methods()
        .find(|m| m.name == "get")
        .expect("get method");
    let body = get.body.as_ref().expect("body");
    assert_eq!(body.statements.len(), 2);

    let block = &body.statements[0].text;
    assert!(block.starts_with(&format!("// {MARKER}")));
    assert!(block.contains("org.slf4j.MDC.put(\"opType\", \"READ\");"));
    assert!(block.contains("org.slf4j.MDC.put(\"resource\", \"orders\");"));
    assert!(block.contains("org.slf4j.MDC.put(\"path\", \"/orders/{id}\");"));
    assert!(block.ends_with("log.info(\"api_call begin\");"));
    assert_eq!(body.statements[1].text, "return service.get(id);");
}

#[test]
fn write_verb_and_expensive_override() {
    let (units, _stats) = instrument_sources(&sources());
    let controller = &units[0].types[0];

    let create = controller.methods().find(|m| m.name == "create").unwrap();
    let create_block = &create.body.as_ref().unwrap().statements[0].text;
    assert!(create_block.contains("MDC.put(\"opType\", \"WRITE\")"));
    // The bare @PostMapping contributes no fragment, so the class prefix
    // keeps its joining slash.
    assert!(create_block.contains("MDC.put(\"path\", \"/orders/\")"));

    let search = controller.methods().find(|m| m.name == "search").unwrap();
    let search_block = &search.body.as_ref().unwrap().statements[0].text;
    assert!(search_block.contains("MDC.put(\"opType\", \"SEARCH_EXPENSIVE\")"));
}

#[test]
fn plain_type_is_left_alone() {
    let (units, stats) = instrument_sources(&sources());
    assert_eq!(stats.skipped_ineligible, 1);

    let service = &units[1].types[0];
    assert!(!service.has_annotation_kind("slf4j"));
    let get = service.methods().next().unwrap();
    assert_eq!(get.body.as_ref().unwrap().statements.len(), 1);
}

#[test]
fn instrumenting_twice_changes_nothing() {
    let (units, first) = instrument_sources(&sources());
    assert!(first.is_conserved());

    let reinstrumented: Vec<(PathBuf, String)> = units
        .iter()
        .map(|u| (u.path.clone(), epilog::syntax::write_unit(u)))
        .collect();
    let (units_again, second) = instrument_sources(&reinstrumented);
    assert_eq!(second.injected, 0);
    assert_eq!(second.skipped_already, 3);

    for (before, after) in units.iter().zip(&units_again) {
        assert_eq!(
            epilog::syntax::write_unit(before),
            epilog::syntax::write_unit(after)
        );
    }
}

#[test]
fn driver_mirrors_a_source_tree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("src");
    let output = dir.path().join("src-instrumented");
    fs::create_dir_all(input.join("com/example/orders")).expect("mkdir");
    fs::write(
        input.join("com/example/orders/OrderController.java"),
        ORDER_CONTROLLER,
    )
    .expect("write controller");
    fs::write(
        input.join("com/example/orders/OrderService.java"),
        PLAIN_SERVICE,
    )
    .expect("write service");

    let report = Driver::new(input.clone(), output.clone())
        .run()
        .expect("driver run");
    assert_eq!(report.parsed, 2);
    assert_eq!(report.written, 2);
    assert_eq!(report.stats.injected, 3);
    assert!(report.stats.is_conserved());

    let controller = fs::read_to_string(output.join("com/example/orders/OrderController.java"))
        .expect("mirrored controller");
    assert!(controller.contains("@lombok.extern.slf4j.Slf4j"));
    assert!(controller.contains(MARKER));

    let service = fs::read_to_string(output.join("com/example/orders/OrderService.java"))
        .expect("mirrored service");
    assert!(!service.contains(MARKER));
    assert!(!service.contains("Slf4j"));
}

#[test]
fn driver_rerun_over_output_is_stable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("src");
    let output = dir.path().join("out");
    fs::create_dir_all(&input).expect("mkdir");
    fs::write(input.join("OrderController.java"), ORDER_CONTROLLER).expect("write");

    Driver::new(input, output.clone()).run().expect("first run");
    let first = fs::read_to_string(output.join("OrderController.java")).expect("read");

    let second_out = dir.path().join("out2");
    let report = Driver::new(output, second_out.clone())
        .run()
        .expect("second run");
    assert_eq!(report.stats.injected, 0);
    assert_eq!(report.stats.skipped_already, 3);

    let second = fs::read_to_string(second_out.join("OrderController.java")).expect("read");
    assert_eq!(first, second);
}
