//! Property tests for route normalization and counter conservation.

use proptest::prelude::*;

use epilog::model::{
    Annotation, Body, CompilationUnit, ExprNode, Member, MethodDeclaration, OpType, Statement,
    TypeDeclaration, Verb,
};
use epilog::pass::{route, run_pass};

fn mapping(kind: &str, fragment: &str) -> Annotation {
    Annotation {
        kind: kind.to_string(),
        text: format!("@{kind}(\"{fragment}\")"),
        args: vec![(
            "value".to_string(),
            ExprNode::StringLit(fragment.to_string()),
        )],
    }
}

fn fragment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_{}/-]{0,12}"
}

fn verb() -> impl Strategy<Value = Verb> {
    prop::sample::select(vec![
        Verb::Get,
        Verb::Post,
        Verb::Put,
        Verb::Delete,
        Verb::Patch,
        Verb::Request,
    ])
}

proptest! {
    #[test]
    fn path_is_normalized(class in fragment(), method in fragment()) {
        let class_anns = [mapping("requestmapping", &class)];
        let method_anns = [mapping("getmapping", &method)];
        let path = route::infer_path(&class_anns, &method_anns);

        prop_assert!(path.is_empty() || path.starts_with('/'));
        prop_assert!(!path.contains("//"));
        prop_assert_ne!(path.as_str(), "/");
    }

    #[test]
    fn path_composition_is_ordered(class in "[a-z]{1,8}", method in "[a-z]{1,8}") {
        let class_anns = [mapping("requestmapping", &class)];
        let method_anns = [mapping("getmapping", &method)];
        let path = route::infer_path(&class_anns, &method_anns);
        prop_assert_eq!(path, format!("/{class}/{method}"));
    }

    #[test]
    fn resource_is_lowercase_and_nonempty(path in "(/[A-Za-z0-9{}_-]{0,10}){0,4}") {
        let resource = route::infer_resource(&path);
        prop_assert!(!resource.is_empty());
        prop_assert_eq!(resource.clone(), resource.to_lowercase());
        if path.trim().is_empty() {
            prop_assert_eq!(resource, "root");
        }
    }

    #[test]
    fn search_marker_always_wins(v in verb(), prefix in "[a-z]{0,6}", suffix in "[a-z]{0,6}") {
        let path = format!("/{prefix}search{suffix}");
        prop_assert_eq!(route::infer_op_type(v, &path), OpType::SearchExpensive);
    }

    #[test]
    fn op_type_without_marker_follows_verb(v in verb(), path in "/[a-df-qt-z]{1,8}") {
        // Alphabet excludes letters that could spell the override markers.
        let expected = match v {
            Verb::Get | Verb::Request => OpType::Read,
            _ => OpType::Write,
        };
        prop_assert_eq!(route::infer_op_type(v, &path), expected);
    }

    #[test]
    fn counters_are_conserved(
        class_marker in any::<bool>(),
        shapes in prop::collection::vec((any::<bool>(), any::<bool>()), 0..8),
    ) {
        let members = shapes
            .iter()
            .map(|&(mapped, has_body)| {
                Member::Method(MethodDeclaration {
                    name: "m".to_string(),
                    header: "void m()".to_string(),
                    annotations: if mapped {
                        vec![mapping("getmapping", "/x")]
                    } else {
                        vec![]
                    },
                    body: has_body.then(|| Body::new(vec![Statement::new("work();")])),
                })
            })
            .collect();

        let ty = TypeDeclaration {
            name: "C".to_string(),
            qualified_name: "p.C".to_string(),
            header: "class C".to_string(),
            annotations: if class_marker {
                vec![Annotation::marker("restcontroller", "@RestController")]
            } else {
                vec![]
            },
            members,
        };
        let mut units = [CompilationUnit::new("C.java".into(), String::new(), vec![ty])];

        let stats = run_pass(&mut units);
        prop_assert!(stats.is_conserved());
        prop_assert_eq!(stats.seen, shapes.len());
    }
}
