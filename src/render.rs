use core::fmt::{self, Write};

use crate::{IntegerTypeCase, EXTENT};

const PROLOGUE: &str = concat!(
    "\n",
    "#include <cstdlib>\n",
    "#include \"uhdf5.h\"\n",
    "\n",
    "void\n",
    "write_file(const char *fname)\n",
    "{\n",
    "    h5::File        file;\n",
    "    h5::Dataset     *dset;\n",
    "    h5::Attribute   *attr;\n",
    "    h5::dimensions  d;\n",
    "\n",
    "    file.create(fname);\n",
    "\n",
);

const EPILOGUE: &str = concat!(
    "\n",
    "}\n",
    "\n",
    "int\n",
    "main(int argc, char *argv[])\n",
    "{\n",
    "    write_file(argv[1]);\n",
    "}\n",
    "\n",
);

/// Write the whole translation unit.
pub(crate) fn generate<W: Write>(out: &mut W) -> fmt::Result {
    generate_prologue(out)?;
    for case in IntegerTypeCase::ALL {
        generate_case(case, out)?;
    }
    generate_epilogue(out)
}

fn generate_prologue<W: Write>(out: &mut W) -> fmt::Result {
    log::trace!("emitting prologue");
    out.write_str(PROLOGUE)
}

/// One scoped block: the dataset handle is acquired and deleted inside the braces.
fn generate_case<W: Write>(case: IntegerTypeCase, out: &mut W) -> fmt::Result {
    let ty = case.type_name();
    let (min, max) = (case.min_literal(), case.max_literal());
    log::debug!("emitting dataset {ty} with values {{ {min}, {max} }}");

    writeln!(out, "{{")?;
    writeln!(out, "// {ty}")?;
    writeln!(out, "{ty} v[{EXTENT}] = {{ {min}, {max} }};")?;
    writeln!(out, "d.clear();")?;
    writeln!(out, "d.push_back({EXTENT});")?;
    writeln!(out, "dset = file.create_dataset<{ty}>(\"{ty}\", d);")?;
    writeln!(out, "dset->write<{ty}>(v);")?;
    writeln!(out, "delete dset;")?;
    writeln!(out, "}}")
}

fn generate_epilogue<W: Write>(out: &mut W) -> fmt::Result {
    log::trace!("emitting epilogue");
    out.write_str(EPILOGUE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Width;

    fn render(case: IntegerTypeCase) -> String {
        let mut out = String::new();
        generate_case(case, &mut out).unwrap();
        out
    }

    #[test]
    fn signed_byte_block() {
        assert_eq!(
            render(IntegerTypeCase::new(true, Width::Fixed8)),
            "{\n\
             // int8_t\n\
             int8_t v[2] = { -128, 127 };\n\
             d.clear();\n\
             d.push_back(2);\n\
             dset = file.create_dataset<int8_t>(\"int8_t\", d);\n\
             dset->write<int8_t>(v);\n\
             delete dset;\n\
             }\n"
        );
    }

    #[test]
    fn unsigned_64_block() {
        assert_eq!(
            render(IntegerTypeCase::new(false, Width::Fixed64)),
            "{\n\
             // uint64_t\n\
             uint64_t v[2] = { 0ULL, 18446744073709551615ULL };\n\
             d.clear();\n\
             d.push_back(2);\n\
             dset = file.create_dataset<uint64_t>(\"uint64_t\", d);\n\
             dset->write<uint64_t>(v);\n\
             delete dset;\n\
             }\n"
        );
    }

    #[test]
    fn frame() {
        let mut out = String::new();
        generate(&mut out).unwrap();
        let head = "\n#include <cstdlib>\n#include \"uhdf5.h\"\n";
        assert!(out.starts_with(head));
        assert!(out.ends_with("    write_file(argv[1]);\n}\n\n"));
        let blocks = out.matches("delete dset;").count();
        assert_eq!(blocks, IntegerTypeCase::ALL.len());
        assert_eq!(
            out.matches('{').count(),
            out.matches('}').count(),
            "unbalanced braces"
        );
    }
}
