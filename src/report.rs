use crate::models::Region;
use std::io::{self, Write};

/// Write the region count, then one `minCol minRow width height` line per region
pub fn write_regions<W: Write>(writer: &mut W, regions: &[Region]) -> io::Result<()> {
    writeln!(writer, "{}", regions.len())?;
    for region in regions {
        let b = region.bbox;
        writeln!(
            writer,
            "{} {} {} {}",
            b.min_col,
            b.min_row,
            b.width(),
            b.height()
        )?;
    }
    Ok(())
}

/// Same as [`write_regions`], preceded by a line naming the source image
pub fn write_record<W: Write>(writer: &mut W, name: &str, regions: &[Region]) -> io::Result<()> {
    writeln!(writer, "{name}")?;
    write_regions(writer, regions)
}
