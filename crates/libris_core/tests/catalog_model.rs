use libris_core::{Book, NewBook, AVAILABLE};

#[test]
fn new_book_defaults_to_available() {
    let book = NewBook::new("Dune", "Herbert", "SciFi");

    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Herbert");
    assert_eq!(book.genre, "SciFi");
    assert_eq!(book.availability, AVAILABLE);
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book = Book {
        book_id: 42,
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        genre: "SciFi".to_string(),
        availability: 1,
    };

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["book_id"], 42);
    assert_eq!(json["title"], "Dune");
    assert_eq!(json["author"], "Herbert");
    assert_eq!(json["genre"], "SciFi");
    assert_eq!(json["availability"], 1);

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn is_available_follows_the_zero_one_convention() {
    let mut book = Book {
        book_id: 1,
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        genre: "SciFi".to_string(),
        availability: 1,
    };
    assert!(book.is_available());

    book.availability = 0;
    assert!(!book.is_available());
}
