//! Boilerplate for a newly created composite test file.

use crate::config::JUnitVersion;

/// `Foo` -> `FooTest`
pub fn test_class_name(primary_class_name: &str) -> String {
    format!("{}Test", primary_class_name)
}

/// Import block for the configured JUnit generation, Mockito included
pub fn header(junit: JUnitVersion) -> String {
    let junit_imports = match junit {
        JUnitVersion::V4 => {
            "import org.junit.Before;\n\
             import org.junit.Test;\n\
             import static org.junit.Assert.*;\n"
        }
        JUnitVersion::V5 => {
            "import org.junit.jupiter.api.BeforeEach;\n\
             import org.junit.jupiter.api.Test;\n\
             import static org.junit.jupiter.api.Assertions.*;\n"
        }
    };
    format!(
        "{}import org.mockito.InjectMocks;\n\
         import org.mockito.Mock;\n\
         import org.mockito.MockitoAnnotations;\n\
         import static org.mockito.Mockito.*;\n\n",
        junit_imports
    )
}

/// Fixture method that initialises `@Mock` fields before each test
pub fn setup_block(junit: JUnitVersion) -> String {
    match junit {
        JUnitVersion::V4 => {
            "    @Before\n    public void setup() { MockitoAnnotations.openMocks(this); }\n"
                .to_string()
        }
        JUnitVersion::V5 => {
            "    @BeforeEach\n    void setup() { MockitoAnnotations.openMocks(this); }\n"
                .to_string()
        }
    }
}

/// The body with trailing whitespace replaced by exactly one newline
pub fn normalize_body(body: &str) -> String {
    format!("{}\n", body.trim_end())
}

/// A complete new test file holding `bodies` in order, each after a blank line
pub fn render_new_file<'a>(
    test_package: &str,
    primary_class_name: &str,
    junit: JUnitVersion,
    bodies: impl IntoIterator<Item = &'a str>,
) -> String {
    let mut out = String::new();
    if !test_package.is_empty() {
        out.push_str(&format!("package {};\n\n", test_package));
    }
    out.push_str(&header(junit));
    out.push_str(&format!(
        "public class {} {{\n",
        test_class_name(primary_class_name)
    ));
    out.push_str(&setup_block(junit));
    for body in bodies {
        out.push('\n');
        out.push_str(&normalize_body(body));
    }
    out.push_str("}\n");
    out
}
