//! Route inference over parsed source, class and method scopes combined.

use std::path::PathBuf;

use epilog::model::{OpType, Verb};
use epilog::pass::route;
use epilog::syntax::parse_unit;

fn infer_first(source: &str) -> epilog::model::RouteMetadata {
    let unit = parse_unit(source, &PathBuf::from("Test.java")).expect("parse failed");
    let ty = &unit.types[0];
    let method = ty.methods().next().expect("method");
    route::infer(&ty.annotations, method)
}

#[test]
fn class_prefix_and_method_suffix_compose() {
    let meta = infer_first(
        "@RestController\n@RequestMapping(\"/products\")\nclass C {\n    @GetMapping(\"/{id}\")\n    Object get() {\n        return null;\n    }\n}\n",
    );
    assert_eq!(meta.verb, Verb::Get);
    assert_eq!(meta.path, "/products/{id}");
    assert_eq!(meta.resource, "products");
    assert_eq!(meta.op_type, OpType::Read);
}

#[test]
fn method_only_mapping_still_routes() {
    let meta = infer_first(
        "class C {\n    @PostMapping(\"/orders\")\n    Object create() {\n        return null;\n    }\n}\n",
    );
    assert_eq!(meta.verb, Verb::Post);
    assert_eq!(meta.path, "/orders");
    assert_eq!(meta.resource, "orders");
    assert_eq!(meta.op_type, OpType::Write);
}

#[test]
fn bare_mappings_yield_empty_path_and_root_resource() {
    let meta = infer_first(
        "@RestController\nclass C {\n    @GetMapping\n    Object all() {\n        return null;\n    }\n}\n",
    );
    assert_eq!(meta.path, "");
    assert_eq!(meta.resource, "root");
    assert_eq!(meta.op_type, OpType::Read);
}

#[test]
fn named_path_argument_is_honored() {
    let meta = infer_first(
        "class C {\n    @RequestMapping(path = \"/reports\", method = RequestMethod.GET)\n    Object f() {\n        return null;\n    }\n}\n",
    );
    assert_eq!(meta.verb, Verb::Request);
    assert_eq!(meta.path, "/reports");
}

#[test]
fn array_argument_uses_first_variant() {
    let meta = infer_first(
        "class C {\n    @GetMapping({\"/a\", \"/b\"})\n    Object f() {\n        return null;\n    }\n}\n",
    );
    assert_eq!(meta.path, "/a");
}

#[test]
fn expensive_path_overrides_get() {
    let meta = infer_first(
        "@RequestMapping(\"/products\")\nclass C {\n    @GetMapping(\"/expensive-search\")\n    Object f() {\n        return null;\n    }\n}\n",
    );
    assert_eq!(meta.verb, Verb::Get);
    assert_eq!(meta.op_type, OpType::SearchExpensive);
}

#[test]
fn search_segment_overrides_write_verb() {
    let meta = infer_first(
        "class C {\n    @PostMapping(\"/Search\")\n    Object f() {\n        return null;\n    }\n}\n",
    );
    assert_eq!(meta.op_type, OpType::SearchExpensive);
}

#[test]
fn redundant_slashes_collapse() {
    let meta = infer_first(
        "@RequestMapping(\"/products/\")\nclass C {\n    @GetMapping(\"//{id}\")\n    Object f() {\n        return null;\n    }\n}\n",
    );
    assert_eq!(meta.path, "/products/{id}");
}

#[test]
fn unreadable_fragment_degrades_to_class_prefix() {
    // A constant-expression argument carries no recoverable literal.
    let meta = infer_first(
        "@RequestMapping(\"/items\")\nclass C {\n    @GetMapping(Paths.DETAIL)\n    Object f() {\n        return null;\n    }\n}\n",
    );
    assert_eq!(meta.path, "/items/");
    assert_eq!(meta.resource, "items");
}
