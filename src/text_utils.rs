use html_escape::decode_html_entities;

/// Convierte el texto con marcado que devuelve el banco remoto en texto visible:
/// quita etiquetas `<...>` y decodifica todas las entidades HTML5.
pub fn markup_to_display(input: &str) -> String {
    decode_html_entities(&strip_tags(input)).into_owned()
}

/// Quita etiquetas cerradas. Un `<` sin `>` se deja tal cual.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::markup_to_display;

    #[test]
    fn decodes_named_and_numeric_entities() {
        assert_eq!(
            markup_to_display("Who wrote &quot;Hamlet&quot;? It&#039;s &amp; more"),
            "Who wrote \"Hamlet\"? It's & more"
        );
        assert_eq!(markup_to_display("Pok&eacute;mon &#x41;"), "Pokémon A");
    }

    #[test]
    fn decodes_less_common_entities_seen_in_trivia_text() {
        assert_eq!(markup_to_display("S&atilde;o Paulo"), "São Paulo");
        assert_eq!(markup_to_display("H&aring;kon &Aring;land"), "Håkon Åland");
        assert_eq!(markup_to_display("No&euml;l"), "Noël");
        assert_eq!(markup_to_display("E=mc&sup2;"), "E=mc²");
        assert_eq!(markup_to_display("5 &euro; for Coca&reg;"), "5 € for Coca®");
        assert_eq!(markup_to_display("Bj&ouml;rk"), "Björk");
    }

    #[test]
    fn strips_tags_but_keeps_escaped_markup_as_text() {
        assert_eq!(markup_to_display("<b>Bold</b> text"), "Bold text");
        assert_eq!(markup_to_display("&lt;i&gt; is italic"), "<i> is italic");
        assert_eq!(markup_to_display("a < b"), "a < b");
        assert_eq!(markup_to_display("Tom & Jerry"), "Tom & Jerry");
    }
}
