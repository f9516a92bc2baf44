// example/src/main.rs

#[allow(dead_code)]
mod generated;

use protodsl::DslError;

// Bring the generated types and entry points into scope:
use generated::{dart_test_case, dart_test_group, list_dart_tests_response, DartTestGroup};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a group with two tests and one nested group.
    let login = dart_test_case(|t| {
        t.set_name("login succeeds");
        t.tags().add("smoke".to_string()).add("auth".to_string());
    });

    let root = dart_test_group(|g| {
        g.set_name("app_test.dart");
        g.tests()
            .add(login.clone())
            .add(dart_test_case(|t| {
                t.set_name("logout").set_skip(true);
            }));
        g.groups().add(dart_test_group(|nested| {
            nested.set_name("settings");
        }));
    });

    // `copy` leaves `root` as it was.
    let extended = root.copy(|g| {
        g.tests().add(login.copy(|t| {
            t.set_name("login with remembered user");
        }));
    });
    println!("root has {} tests, extended has {}", root.tests().len(), extended.tests().len());

    // Replacing by index only works inside the current bounds.
    let renamed = root.copy(|g| {
        let mut tests = g.tests();
        if let Err(DslError::Index { index, len }) = tests.set(5, login.clone()) {
            println!("index {} is out of bounds for {} tests", index, len);
        }
    });
    assert_eq!(renamed, root);

    let response = list_dart_tests_response(|r| {
        r.set_group(root.clone());
    });

    print_group(response.group().unwrap_or(&DartTestGroup::default()), 0);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn print_group(group: &DartTestGroup, depth: usize) {
    let pad = "  ".repeat(depth);
    println!("{}group {}", pad, group.name());
    for test in group.tests() {
        let skip = if test.skip() { " (skipped)" } else { "" };
        println!("{}  test {}{} {:?}", pad, test.name(), skip, test.tags());
    }
    for nested in group.groups() {
        print_group(nested, depth + 1);
    }
}
