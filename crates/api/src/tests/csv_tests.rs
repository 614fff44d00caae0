// Copyright (C) 2026 Plantel Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, ImportRow, detect_delimiter, parse_students_csv};

#[test]
fn test_delimiter_semicolon_wins_when_more_frequent() {
    assert_eq!(detect_delimiter("tipo;documento;nombre\na;b;c"), b';');
}

#[test]
fn test_delimiter_comma_wins_when_more_frequent() {
    assert_eq!(detect_delimiter("tipo,documento,nombre\na,b,c"), b',');
}

#[test]
fn test_delimiter_tie_goes_to_comma() {
    assert_eq!(detect_delimiter("tipo;documento,nombre"), b',');
    assert_eq!(detect_delimiter(""), b',');
}

#[test]
fn test_delimiter_only_counts_the_header_line() {
    // Data lines full of semicolons must not override a comma header.
    let text = "tipo,documento\nCC;1;2;3;4,x";
    assert_eq!(detect_delimiter(text), b',');
}

#[test]
fn test_parses_semicolon_file() {
    let text = "tipo;documento;nombre;apellido;grado;curso;jornada;correo\n\
                CC;1002003004;María;García;10;A;mañana;maria@example.com\n";

    let rows: Vec<ImportRow> = parse_students_csv(text).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tipo_documento.as_deref(), Some("CC"));
    assert_eq!(rows[0].numero_documento.as_deref(), Some("1002003004"));
    assert_eq!(rows[0].nombre.as_deref(), Some("María"));
    assert_eq!(rows[0].correo.as_deref(), Some("maria@example.com"));
}

#[test]
fn test_header_synonyms_are_recognized() {
    let text = "tipo_documento,numero_documento,nombres,apellidos,email\n\
                TI,1002003004,Ana,Ruiz,ana@example.com\n";

    let rows: Vec<ImportRow> = parse_students_csv(text).unwrap();
    assert_eq!(rows[0].tipo_documento.as_deref(), Some("TI"));
    assert_eq!(rows[0].nombre.as_deref(), Some("Ana"));
    assert_eq!(rows[0].apellido.as_deref(), Some("Ruiz"));
    assert_eq!(rows[0].correo.as_deref(), Some("ana@example.com"));
}

#[test]
fn test_headers_are_case_insensitive_and_trimmed() {
    let text = " Nombre , APELLIDO \nAna,Ruiz\n";

    let rows: Vec<ImportRow> = parse_students_csv(text).unwrap();
    assert_eq!(rows[0].nombre.as_deref(), Some("Ana"));
    assert_eq!(rows[0].apellido.as_deref(), Some("Ruiz"));
}

#[test]
fn test_quoted_field_keeps_embedded_delimiter() {
    let text = "nombre,apellido\n\"García, de la Torre\",Ruiz\n";

    let rows: Vec<ImportRow> = parse_students_csv(text).unwrap();
    assert_eq!(rows[0].nombre.as_deref(), Some("García, de la Torre"));
}

#[test]
fn test_escaped_quotes_become_literal_quotes() {
    let text = "nombre,apellido\n\"Ana \"\"Anita\"\"\",Ruiz\n";

    let rows: Vec<ImportRow> = parse_students_csv(text).unwrap();
    assert_eq!(rows[0].nombre.as_deref(), Some("Ana \"Anita\""));
}

#[test]
fn test_crlf_line_endings_are_handled() {
    let text = "nombre,apellido\r\nAna,Ruiz\r\nLuis,Mora\r\n";

    let rows: Vec<ImportRow> = parse_students_csv(text).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].nombre.as_deref(), Some("Luis"));
}

#[test]
fn test_blank_rows_are_dropped() {
    let text = "nombre,apellido\nAna,Ruiz\n , \n\nLuis,Mora\n";

    let rows: Vec<ImportRow> = parse_students_csv(text).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_unrecognized_columns_are_ignored() {
    let text = "nombre,edad,apellido\nAna,15,Ruiz\n";

    let rows: Vec<ImportRow> = parse_students_csv(text).unwrap();
    assert_eq!(rows[0].nombre.as_deref(), Some("Ana"));
    assert_eq!(rows[0].apellido.as_deref(), Some("Ruiz"));
}

#[test]
fn test_empty_text_is_rejected() {
    assert_eq!(parse_students_csv(""), Err(ApiError::EmptyCsv));
    assert_eq!(parse_students_csv("  \n \n"), Err(ApiError::EmptyCsv));
}

#[test]
fn test_header_without_recognized_columns_is_rejected() {
    let text = "foo,bar\n1,2\n";
    assert_eq!(parse_students_csv(text), Err(ApiError::EmptyCsv));
}

#[test]
fn test_header_only_file_is_rejected() {
    let text = "nombre,apellido\n";
    assert_eq!(parse_students_csv(text), Err(ApiError::EmptyCsv));
}

#[test]
fn test_ragged_rows_do_not_fail_the_file() {
    let text = "nombre,apellido,correo\nAna,Ruiz\nLuis,Mora,luis@example.com\n";

    let rows: Vec<ImportRow> = parse_students_csv(text).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].correo, None);
    assert_eq!(rows[1].correo.as_deref(), Some("luis@example.com"));
}
