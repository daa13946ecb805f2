use packfont::{
    pack, BitOrder, Bitmap, ByteOrder, FormatError, Geometry, Listing, RenderOptions, Selection,
    SourceWriter, Table,
};

const FONT: &str = include_str!("font-8x16.cpp");

const LETTER_A: &str = "\
0x41 'A'
--------
--------
---x----
--xxx---
-xx-xx--
xx---xx-
xx---xx-
xxxxxxx-
xx---xx-
xx---xx-
xx---xx-
xx---xx-
--------
--------
--------
--------

";

#[test]
fn smoke() {
    let table = Table::parse(FONT).unwrap();
    assert_eq!(table.declaration().name, "font_data");
    assert_eq!(table.declaration().glyph_count, 95);
    assert_eq!(table.glyph_len(), 16);
    assert_eq!(table.len(), 95);
    assert!(table.get(0).unwrap().iter().all(|&b| b == 0));
}

#[test]
fn select_letter() {
    let table = Table::parse(FONT).unwrap();
    let listing = Listing::new(&table, RenderOptions::default()).unwrap();
    let out = listing
        .render(&table, &Selection::parse(Some("A")))
        .unwrap();
    assert_eq!(out, LETTER_A);
}

#[test]
fn select_everything() {
    let table = Table::parse(FONT).unwrap();
    let listing = Listing::new(&table, RenderOptions::default()).unwrap();
    let out = listing.render(&table, &Selection::parse(None)).unwrap();
    // label + 16 rows + blank line per glyph
    assert_eq!(out.lines().count(), 95 * 18);
    assert!(out.starts_with("0x20 ' '\n--------\n"));
    assert!(out.contains(LETTER_A));
}

#[test]
fn range_order_irrelevant() {
    let table = Table::parse(FONT).unwrap();
    let listing = Listing::new(&table, RenderOptions::default()).unwrap();
    let forward = listing.render(&table, &Selection::parse(Some("65-90"))).unwrap();
    let backward = listing.render(&table, &Selection::parse(Some("90-65"))).unwrap();
    assert_eq!(forward, backward);
    assert!(forward.starts_with(LETTER_A));
    assert_eq!(forward.matches("\n\n").count(), 26);
}

#[test]
fn repeated_text() {
    let table = Table::parse(FONT).unwrap();
    let listing = Listing::new(&table, RenderOptions::default()).unwrap();
    let out = listing.render(&table, &Selection::parse(Some("AA"))).unwrap();
    assert_eq!(out, [LETTER_A, LETTER_A].concat());
}

#[test]
fn rotated_letter() {
    let table = Table::parse(FONT).unwrap();
    let options = RenderOptions {
        rotate: true,
        ..RenderOptions::default()
    };
    let listing = Listing::new(&table, options).unwrap();
    let out = listing.render(&table, &Selection::parse(Some("A"))).unwrap();
    let rows = out.lines().skip(1).take_while(|l| !l.is_empty()).collect::<Vec<_>>();
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.len() == 16));
    // left column of the letter becomes the top row, read bottom to top
    assert_eq!(rows[0], "----xxxxxxx-----");
}

#[test]
fn unsupported_length() {
    let src = FONT.replace("font_data[95][16]", "font_data[95][17]");
    let table = Table::parse(&src);
    assert_eq!(table.unwrap_err(), FormatError::NoGlyphs);

    let src = "const uint8_t font_data[1][17] = {\n    {0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0},\n};\n";
    let table = Table::parse(src).unwrap();
    assert_eq!(
        Listing::new(&table, RenderOptions::default()).unwrap_err(),
        FormatError::UnsupportedGeometry(17)
    );
}

#[test]
fn prototype_before_definition() {
    let src = format!("extern \"C\" const uint8_t font_data[95][16];\n{}", FONT);
    let table = Table::parse(&src).unwrap();
    assert_eq!(table.len(), 95);
    let listing = Listing::new(&table, RenderOptions::default()).unwrap();
    let out = listing.render(&table, &Selection::parse(Some("A"))).unwrap();
    assert_eq!(out, LETTER_A);
}

#[test]
fn unrelated_array_first() {
    let src = format!(
        "const uint8_t colors[4][3] = {{\n    {{0xFF, 0x00, 0x00}},\n    {{0x00, 0xFF, 0x00}},\n}};\n{}",
        FONT
    );
    let table = Table::parse(&src).unwrap();
    assert_eq!(table.declaration().name, "font_data");
    assert_eq!(table.glyph_len(), 16);
    assert_eq!(table.len(), 95);
}

#[test]
fn huge_range() {
    let table = Table::parse(FONT).unwrap();
    let listing = Listing::new(&table, RenderOptions::default()).unwrap();
    let everything = listing.render(&table, &Selection::All).unwrap();
    for selection in ["0-4294967296", "0x0-0xFFFFFFFF"] {
        let out = listing.render(&table, &Selection::parse(Some(selection))).unwrap();
        assert_eq!(out, everything);
    }
}

#[test]
fn missing_declaration() {
    assert_eq!(
        Table::parse("int main() { return 0; }").unwrap_err(),
        FormatError::DeclarationNotFound
    );
}

#[test]
fn indivisible_override() {
    let table = Table::parse(FONT).unwrap();
    let options = RenderOptions {
        height: Some(5),
        ..RenderOptions::default()
    };
    assert_eq!(
        Listing::new(&table, options).unwrap_err(),
        FormatError::IndivisibleGeometry {
            glyph_len: 16,
            height: 5
        }
    );
}

fn diagonal(geometry: Geometry) -> Bitmap {
    let mut bitmap = Bitmap::new(geometry.width, geometry.height);
    for y in 0..geometry.height {
        bitmap.set(y % geometry.width, y, true);
        bitmap.set(geometry.width - 1, y, y % 3 == 0);
    }
    bitmap
}

#[test]
fn generated_source_round_trip() {
    for geometry in [Geometry::SMALL, Geometry::LARGE] {
        let bitmaps = (0..95).map(|_| diagonal(geometry)).collect::<Vec<_>>();
        let mut writer = SourceWriter::new(String::new(), &geometry, bitmaps.len()).unwrap();
        for (codepoint, bitmap) in (0x20..).zip(&bitmaps) {
            writer.glyph(codepoint, &pack(bitmap)).unwrap();
        }
        let src = writer.finish().unwrap();

        let table = Table::parse(&src).unwrap();
        assert_eq!(table.len(), 95);
        let options = RenderOptions {
            bit_order: BitOrder::LsbLeft,
            byte_order: Some(ByteOrder::Little),
            ..RenderOptions::default()
        };
        let listing = Listing::new(&table, options).unwrap();
        assert_eq!(listing.geometry(), geometry);
        for (bytes, bitmap) in table.iter().zip(&bitmaps) {
            assert_eq!(&listing.bitmap(bytes).unwrap(), bitmap);
        }
    }
}
