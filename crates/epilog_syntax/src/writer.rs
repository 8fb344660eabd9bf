//! Writer for instrumented compilation units.
//!
//! Serializes a (possibly mutated) unit back to Java text. Preambles,
//! headers, and raw members are emitted verbatim; method bodies are
//! re-emitted statement by statement. Layout is normalized to four-space
//! indentation — formatting fidelity beyond that is out of scope.

use epilog_model::{CompilationUnit, Member, MethodDeclaration, TypeDeclaration};

/// Indentation for type members.
const MEMBER_INDENT: &str = "    ";
/// Indentation for statements inside method bodies.
const BODY_INDENT: &str = "        ";

/// Serializes a compilation unit to source text.
#[must_use]
pub fn write_unit(unit: &CompilationUnit) -> String {
    let mut writer = Writer::default();
    writer.unit(unit);
    writer.output
}

/// Writer state.
#[derive(Default)]
struct Writer {
    output: String,
}

impl Writer {
    fn unit(&mut self, unit: &CompilationUnit) {
        if !unit.preamble.is_empty() {
            self.output.push_str(&unit.preamble);
            self.output.push_str("\n\n");
        }
        for (i, ty) in unit.types.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.type_declaration(ty);
        }
    }

    fn type_declaration(&mut self, ty: &TypeDeclaration) {
        for annotation in &ty.annotations {
            self.output.push_str(&annotation.text);
            self.output.push('\n');
        }
        self.output.push_str(&ty.header);
        self.output.push_str(" {\n");

        for (i, member) in ty.members.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            match member {
                Member::Raw(text) => self.raw_member(text),
                Member::Method(method) => self.method(method),
            }
        }

        self.output.push_str("}\n");
    }

    fn raw_member(&mut self, text: &str) {
        self.indented_block(MEMBER_INDENT, text);
    }

    fn method(&mut self, method: &MethodDeclaration) {
        for annotation in &method.annotations {
            self.output.push_str(MEMBER_INDENT);
            self.output.push_str(&annotation.text);
            self.output.push('\n');
        }
        self.output.push_str(MEMBER_INDENT);
        self.output.push_str(&method.header);

        match &method.body {
            None => self.output.push_str(";\n"),
            Some(body) => {
                self.output.push_str(" {\n");
                for statement in &body.statements {
                    self.indented_block(BODY_INDENT, &statement.text);
                }
                self.output.push_str(MEMBER_INDENT);
                self.output.push_str("}\n");
            }
        }
    }

    /// Emits a multi-line text block with the given indentation on the
    /// first line; continuation lines keep whatever indentation the slice
    /// already carries.
    fn indented_block(&mut self, indent: &str, text: &str) {
        for (i, line) in text.lines().enumerate() {
            if i == 0 || !line.starts_with(char::is_whitespace) {
                self.output.push_str(indent);
            }
            self.output.push_str(line);
            self.output.push('\n');
        }
    }
}
