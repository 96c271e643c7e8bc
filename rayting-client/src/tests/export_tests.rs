use super::*;

fn film(title: &str, rating: &str) -> Film {
    Film {
        id: 1,
        title: title.into(),
        letter_rating: Some(rating.into()),
        release_year: Some(1999),
        genres: Some("Drama, Comedy".into()),
        ..Default::default()
    }
}

#[test]
fn header_then_rows() {
    let a = film("Matrix, The", "A+");
    let b = film("Heat", "B");
    let mut buf = Vec::new();
    write_csv(&mut buf, &[&a, &b]).unwrap();

    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,title,rating,score,release_year"));
    assert!(lines[1].starts_with("1,The Matrix,A+,20,1999"));
    // Embedded commas are quoted.
    assert!(lines[1].ends_with("\"Drama, Comedy\""));
    assert!(lines[2].starts_with("1,Heat,B,"));
}

#[test]
fn book_rows_use_book_columns() {
    let book = Book {
        id: 5,
        book_name: "Dune".into(),
        author: Some("Frank Herbert".into()),
        j_rayting: Some("A".into()),
        ..Default::default()
    };
    assert_eq!(Book::headers().len(), book.record().len());
    assert_eq!(book.record()[2], "Frank Herbert");
}

#[test]
fn export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("films.csv");
    let a = film("Heat", "B");
    let count = export_csv(&path, &[&a]).unwrap();
    assert_eq!(count, 1);
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
}
