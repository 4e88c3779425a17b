//! The entity table: named symbols written as `\name` in Org text.
//!
//! The table is built once, on first use, from the fixed definitions below and is never
//! mutated afterwards, so lookups are safe from any thread.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// One named symbol with its renderings for each backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub name: &'static str,
    pub latex: &'static str,
    /// The LaTeX rendering only works in math mode.
    pub latex_math: bool,
    pub html: &'static str,
    pub ascii: &'static str,
    pub utf8: &'static str,
}

static ENTITIES: Lazy<HashMap<&'static str, Entity>> = Lazy::new(|| {
    DEFINITIONS
        .iter()
        .map(|&(name, latex, latex_math, html, ascii, utf8)| {
            (
                name,
                Entity {
                    name,
                    latex,
                    latex_math,
                    html,
                    ascii,
                    utf8,
                },
            )
        })
        .collect()
});

/// Look up an entity by its exact (case-sensitive) name.
pub fn get_entity(name: &str) -> Option<&'static Entity> {
    ENTITIES.get(name)
}

pub fn is_valid_entity(name: &str) -> bool {
    ENTITIES.contains_key(name)
}

/// All entity names, in definition order.
pub fn entity_names() -> impl Iterator<Item = &'static str> {
    DEFINITIONS.iter().map(|definition| definition.0)
}

// (name, latex, latex_math, html, ascii, utf8)
type Definition = (
    &'static str,
    &'static str,
    bool,
    &'static str,
    &'static str,
    &'static str,
);

#[rustfmt::skip]
static DEFINITIONS: &[Definition] = &[
    // Latin
    ("Agrave", "\\`{A}", false, "&Agrave;", "A", "À"),
    ("agrave", "\\`{a}", false, "&agrave;", "a", "à"),
    ("Aacute", "\\'{A}", false, "&Aacute;", "A", "Á"),
    ("aacute", "\\'{a}", false, "&aacute;", "a", "á"),
    ("Acirc", "\\^{A}", false, "&Acirc;", "A", "Â"),
    ("acirc", "\\^{a}", false, "&acirc;", "a", "â"),
    ("Amacr", "\\={A}", false, "&Amacr;", "A", "Ā"),
    ("amacr", "\\={a}", false, "&amacr;", "a", "ā"),
    ("Atilde", "\\~{A}", false, "&Atilde;", "A", "Ã"),
    ("atilde", "\\~{a}", false, "&atilde;", "a", "ã"),
    ("Auml", "\\\"{A}", false, "&Auml;", "Ae", "Ä"),
    ("auml", "\\\"{a}", false, "&auml;", "ae", "ä"),
    ("Aring", "\\AA{}", false, "&Aring;", "A", "Å"),
    ("AA", "\\AA{}", false, "&Aring;", "A", "Å"),
    ("aring", "\\aa{}", false, "&aring;", "a", "å"),
    ("AElig", "\\AE{}", false, "&AElig;", "AE", "Æ"),
    ("aelig", "\\ae{}", false, "&aelig;", "ae", "æ"),
    ("Ccedil", "\\c{C}", false, "&Ccedil;", "C", "Ç"),
    ("ccedil", "\\c{c}", false, "&ccedil;", "c", "ç"),
    ("Egrave", "\\`{E}", false, "&Egrave;", "E", "È"),
    ("egrave", "\\`{e}", false, "&egrave;", "e", "è"),
    ("Eacute", "\\'{E}", false, "&Eacute;", "E", "É"),
    ("eacute", "\\'{e}", false, "&eacute;", "e", "é"),
    ("Ecirc", "\\^{E}", false, "&Ecirc;", "E", "Ê"),
    ("ecirc", "\\^{e}", false, "&ecirc;", "e", "ê"),
    ("Euml", "\\\"{E}", false, "&Euml;", "E", "Ë"),
    ("euml", "\\\"{e}", false, "&euml;", "e", "ë"),
    ("Igrave", "\\`{I}", false, "&Igrave;", "I", "Ì"),
    ("igrave", "\\`{i}", false, "&igrave;", "i", "ì"),
    ("Iacute", "\\'{I}", false, "&Iacute;", "I", "Í"),
    ("iacute", "\\'{i}", false, "&iacute;", "i", "í"),
    ("Idot", "\\.{I}", false, "&idot;", "I", "İ"),
    ("inodot", "\\i", false, "&inodot;", "i", "ı"),
    ("Icirc", "\\^{I}", false, "&Icirc;", "I", "Î"),
    ("icirc", "\\^{i}", false, "&icirc;", "i", "î"),
    ("Iuml", "\\\"{I}", false, "&Iuml;", "I", "Ï"),
    ("iuml", "\\\"{i}", false, "&iuml;", "i", "ï"),
    ("Ntilde", "\\~{N}", false, "&Ntilde;", "N", "Ñ"),
    ("ntilde", "\\~{n}", false, "&ntilde;", "n", "ñ"),
    ("Ograve", "\\`{O}", false, "&Ograve;", "O", "Ò"),
    ("ograve", "\\`{o}", false, "&ograve;", "o", "ò"),
    ("Oacute", "\\'{O}", false, "&Oacute;", "O", "Ó"),
    ("oacute", "\\'{o}", false, "&oacute;", "o", "ó"),
    ("Ocirc", "\\^{O}", false, "&Ocirc;", "O", "Ô"),
    ("ocirc", "\\^{o}", false, "&ocirc;", "o", "ô"),
    ("Otilde", "\\~{O}", false, "&Otilde;", "O", "Õ"),
    ("otilde", "\\~{o}", false, "&otilde;", "o", "õ"),
    ("Ouml", "\\\"{O}", false, "&Ouml;", "Oe", "Ö"),
    ("ouml", "\\\"{o}", false, "&ouml;", "oe", "ö"),
    ("Oslash", "\\O", false, "&Oslash;", "O", "Ø"),
    ("oslash", "\\o{}", false, "&oslash;", "o", "ø"),
    ("OElig", "\\OE{}", false, "&OElig;", "OE", "Œ"),
    ("oelig", "\\oe{}", false, "&oelig;", "oe", "œ"),
    ("Scaron", "\\v{S}", false, "&Scaron;", "S", "Š"),
    ("scaron", "\\v{s}", false, "&scaron;", "s", "š"),
    ("szlig", "\\ss{}", false, "&szlig;", "ss", "ß"),
    ("Ugrave", "\\`{U}", false, "&Ugrave;", "U", "Ù"),
    ("ugrave", "\\`{u}", false, "&ugrave;", "u", "ù"),
    ("Uacute", "\\'{U}", false, "&Uacute;", "U", "Ú"),
    ("uacute", "\\'{u}", false, "&uacute;", "u", "ú"),
    ("Ucirc", "\\^{U}", false, "&Ucirc;", "U", "Û"),
    ("ucirc", "\\^{u}", false, "&ucirc;", "u", "û"),
    ("Uuml", "\\\"{U}", false, "&Uuml;", "Ue", "Ü"),
    ("uuml", "\\\"{u}", false, "&uuml;", "ue", "ü"),
    ("Yacute", "\\'{Y}", false, "&Yacute;", "Y", "Ý"),
    ("yacute", "\\'{y}", false, "&yacute;", "y", "ý"),
    ("Yuml", "\\\"{Y}", false, "&Yuml;", "Y", "Ÿ"),
    ("yuml", "\\\"{y}", false, "&yuml;", "y", "ÿ"),
    // Latin (special face)
    ("fnof", "\\textit{f}", false, "&fnof;", "f", "ƒ"),
    ("real", "\\Re", true, "&real;", "R", "ℜ"),
    ("image", "\\Im", true, "&image;", "I", "ℑ"),
    ("weierp", "\\wp", true, "&weierp;", "P", "℘"),
    ("ell", "\\ell", true, "&ell;", "ell", "ℓ"),
    ("imath", "\\imath", true, "&imath;", "[dotless i]", "ı"),
    ("jmath", "\\jmath", true, "&jmath;", "[dotless j]", "ȷ"),
    // Greek
    ("Alpha", "A", false, "&Alpha;", "Alpha", "Α"),
    ("alpha", "\\alpha", true, "&alpha;", "alpha", "α"),
    ("Beta", "B", false, "&Beta;", "Beta", "Β"),
    ("beta", "\\beta", true, "&beta;", "beta", "β"),
    ("Gamma", "\\Gamma", true, "&Gamma;", "Gamma", "Γ"),
    ("gamma", "\\gamma", true, "&gamma;", "gamma", "γ"),
    ("Delta", "\\Delta", true, "&Delta;", "Delta", "Δ"),
    ("delta", "\\delta", true, "&delta;", "delta", "δ"),
    ("Epsilon", "E", false, "&Epsilon;", "Epsilon", "Ε"),
    ("epsilon", "\\epsilon", true, "&epsilon;", "epsilon", "ε"),
    ("varepsilon", "\\varepsilon", true, "&epsilon;", "varepsilon", "ε"),
    ("Zeta", "Z", false, "&Zeta;", "Zeta", "Ζ"),
    ("zeta", "\\zeta", true, "&zeta;", "zeta", "ζ"),
    ("Eta", "H", false, "&Eta;", "Eta", "Η"),
    ("eta", "\\eta", true, "&eta;", "eta", "η"),
    ("Theta", "\\Theta", true, "&Theta;", "Theta", "Θ"),
    ("theta", "\\theta", true, "&theta;", "theta", "θ"),
    ("thetasym", "\\vartheta", true, "&thetasym;", "theta", "ϑ"),
    ("vartheta", "\\vartheta", true, "&thetasym;", "theta", "ϑ"),
    ("Iota", "I", false, "&Iota;", "Iota", "Ι"),
    ("iota", "\\iota", true, "&iota;", "iota", "ι"),
    ("Kappa", "K", false, "&Kappa;", "Kappa", "Κ"),
    ("kappa", "\\kappa", true, "&kappa;", "kappa", "κ"),
    ("Lambda", "\\Lambda", true, "&Lambda;", "Lambda", "Λ"),
    ("lambda", "\\lambda", true, "&lambda;", "lambda", "λ"),
    ("Mu", "M", false, "&Mu;", "Mu", "Μ"),
    ("mu", "\\mu", true, "&mu;", "mu", "μ"),
    ("nu", "\\nu", true, "&nu;", "nu", "ν"),
    ("Nu", "N", false, "&Nu;", "Nu", "Ν"),
    ("Xi", "\\Xi", true, "&Xi;", "Xi", "Ξ"),
    ("xi", "\\xi", true, "&xi;", "xi", "ξ"),
    ("Omicron", "O", false, "&Omicron;", "Omicron", "Ο"),
    ("omicron", "\\textit{o}", false, "&omicron;", "omicron", "ο"),
    ("Pi", "\\Pi", true, "&Pi;", "Pi", "Π"),
    ("pi", "\\pi", true, "&pi;", "pi", "π"),
    ("Rho", "P", false, "&Rho;", "Rho", "Ρ"),
    ("rho", "\\rho", true, "&rho;", "rho", "ρ"),
    ("Sigma", "\\Sigma", true, "&Sigma;", "Sigma", "Σ"),
    ("sigma", "\\sigma", true, "&sigma;", "sigma", "σ"),
    ("sigmaf", "\\varsigma", true, "&sigmaf;", "sigmaf", "ς"),
    ("varsigma", "\\varsigma", true, "&sigmaf;", "varsigma", "ς"),
    ("Tau", "T", false, "&Tau;", "Tau", "Τ"),
    ("tau", "\\tau", true, "&tau;", "tau", "τ"),
    ("Upsilon", "\\Upsilon", true, "&Upsilon;", "Upsilon", "Υ"),
    ("upsih", "\\Upsilon", true, "&upsih;", "upsilon", "ϒ"),
    ("upsilon", "\\upsilon", true, "&upsilon;", "upsilon", "υ"),
    ("Phi", "\\Phi", true, "&Phi;", "Phi", "Φ"),
    ("phi", "\\phi", true, "&phi;", "phi", "ɸ"),
    ("varphi", "\\varphi", true, "&varphi;", "varphi", "φ"),
    ("Chi", "X", false, "&Chi;", "Chi", "Χ"),
    ("chi", "\\chi", true, "&chi;", "chi", "χ"),
    ("acutex", "\\acute x", true, "&acute;x", "'x", "𝑥́"),
    ("Psi", "\\Psi", true, "&Psi;", "Psi", "Ψ"),
    ("psi", "\\psi", true, "&psi;", "psi", "ψ"),
    ("Omega", "\\Omega", true, "&Omega;", "Omega", "Ω"),
    ("omega", "\\omega", true, "&omega;", "omega", "ω"),
    ("piv", "\\varpi", true, "&piv;", "omega-pi", "ϖ"),
    ("varpi", "\\varpi", true, "&piv;", "omega-pi", "ϖ"),
    ("partial", "\\partial", true, "&part;", "[partial differential]", "∂"),
    // Hebrew
    ("alefsym", "\\aleph", true, "&alefsym;", "aleph", "ℵ"),
    ("aleph", "\\aleph", true, "&aleph;", "aleph", "ℵ"),
    ("gimel", "\\gimel", true, "&gimel;", "gimel", "ℷ"),
    ("beth", "\\beth", true, "&beth;", "beth", "ב"),
    ("dalet", "\\daleth", true, "&daleth;", "dalet", "ד"),
    // Dead languages
    ("ETH", "\\DH{}", false, "&ETH;", "D", "Ð"),
    ("eth", "\\dh{}", false, "&eth;", "dh", "ð"),
    ("THORN", "\\TH{}", false, "&THORN;", "TH", "Þ"),
    ("thorn", "\\th{}", false, "&thorn;", "th", "þ"),
    // Punctuation
    ("dots", "\\dots{}", false, "&hellip;", "...", "…"),
    ("cdots", "\\cdots{}", true, "&ctdot;", "...", "⋯"),
    ("hellip", "\\dots{}", false, "&hellip;", "...", "…"),
    ("middot", "\\textperiodcentered{}", false, "&middot;", ".", "·"),
    ("iexcl", "!`", false, "&iexcl;", "!", "¡"),
    ("iquest", "?`", false, "&iquest;", "?", "¿"),
    ("shy", "\\-", false, "&shy;", "", "\u{ad}"),
    ("ndash", "--", false, "&ndash;", "-", "–"),
    ("mdash", "---", false, "&mdash;", "--", "—"),
    ("quot", "\\textquotedbl{}", false, "&quot;", "\"", "\""),
    ("acute", "\\textasciiacute{}", false, "&acute;", "'", "´"),
    ("ldquo", "\\textquotedblleft{}", false, "&ldquo;", "\"", "“"),
    ("rdquo", "\\textquotedblright{}", false, "&rdquo;", "\"", "”"),
    ("bdquo", "\\quotedblbase{}", false, "&bdquo;", "\"", "„"),
    ("lsquo", "\\textquoteleft{}", false, "&lsquo;", "`", "‘"),
    ("rsquo", "\\textquoteright{}", false, "&rsquo;", "'", "’"),
    ("sbquo", "\\quotesinglbase{}", false, "&sbquo;", ",", "‚"),
    ("laquo", "\\guillemotleft{}", false, "&laquo;", "<<", "«"),
    ("raquo", "\\guillemotright{}", false, "&raquo;", ">>", "»"),
    ("lsaquo", "\\guilsinglleft{}", false, "&lsaquo;", "<", "‹"),
    ("rsaquo", "\\guilsinglright{}", false, "&rsaquo;", ">", "›"),
    // Other
    ("circ", "\\^{}", false, "&circ;", "^", "ˆ"),
    ("vert", "\\vert{}", true, "&vert;", "|", "|"),
    ("vbar", "|", false, "|", "|", "|"),
    ("brvbar", "\\textbrokenbar{}", false, "&brvbar;", "|", "¦"),
    ("S", "\\S", false, "&sect;", "paragraph", "§"),
    ("sect", "\\S", false, "&sect;", "paragraph", "§"),
    ("amp", "\\&", false, "&amp;", "&", "&"),
    ("lt", "\\textless{}", false, "&lt;", "<", "<"),
    ("gt", "\\textgreater{}", false, "&gt;", ">", ">"),
    ("tilde", "\\textasciitilde{}", false, "~", "~", "~"),
    ("slash", "/", false, "/", "/", "/"),
    ("plus", "+", false, "+", "+", "+"),
    ("under", "\\_", false, "_", "_", "_"),
    ("equal", "=", false, "=", "=", "="),
    ("asciicirc", "\\textasciicircum{}", false, "^", "^", "^"),
    ("dagger", "\\textdagger{}", false, "&dagger;", "[dagger]", "†"),
    ("dag", "\\dag{}", false, "&dagger;", "[dagger]", "†"),
    ("Dagger", "\\textdaggerdbl{}", false, "&Dagger;", "[doubledagger]", "‡"),
    ("ddag", "\\ddag{}", false, "&Dagger;", "[doubledagger]", "‡"),
    // Whitespace
    ("nbsp", "~", false, "&nbsp;", " ", "\u{a0}"),
    ("ensp", "\\hspace*{.5em}", false, "&ensp;", " ", "\u{2002}"),
    ("emsp", "\\hspace*{1em}", false, "&emsp;", " ", "\u{2003}"),
    ("thinsp", "\\hspace*{.2em}", false, "&thinsp;", " ", "\u{2009}"),
    // Currency
    ("curren", "\\textcurrency{}", false, "&curren;", "curr.", "¤"),
    ("cent", "\\textcent{}", false, "&cent;", "cent", "¢"),
    ("pound", "\\pounds{}", false, "&pound;", "pound", "£"),
    ("yen", "\\textyen{}", false, "&yen;", "yen", "¥"),
    ("euro", "\\texteuro{}", false, "&euro;", "EUR", "€"),
    ("EUR", "\\texteuro{}", false, "&euro;", "EUR", "€"),
    ("dollar", "\\$", false, "$", "$", "$"),
    ("USD", "\\$", false, "$", "$", "$"),
    // Property Marks
    ("copy", "\\textcopyright{}", false, "&copy;", "(c)", "©"),
    ("reg", "\\textregistered{}", false, "&reg;", "(r)", "®"),
    ("trade", "\\texttrademark{}", false, "&trade;", "TM", "™"),
    // Science et al.
    ("minus", "\\minus", true, "&minus;", "-", "−"),
    ("pm", "\\textpm{}", false, "&plusmn;", "+-", "±"),
    ("plusmn", "\\textpm{}", false, "&plusmn;", "+-", "±"),
    ("times", "\\texttimes{}", false, "&times;", "*", "×"),
    ("frasl", "/", false, "&frasl;", "/", "⁄"),
    ("colon", "\\colon", true, ":", ":", ":"),
    ("div", "\\textdiv{}", false, "&divide;", "/", "÷"),
    ("frac12", "\\textonehalf{}", false, "&frac12;", "1/2", "½"),
    ("frac14", "\\textonequarter{}", false, "&frac14;", "1/4", "¼"),
    ("frac34", "\\textthreequarters{}", false, "&frac34;", "3/4", "¾"),
    ("permil", "\\textperthousand{}", false, "&permil;", "per thousand", "‰"),
    ("sup1", "\\textonesuperior{}", false, "&sup1;", "^1", "¹"),
    ("sup2", "\\texttwosuperior{}", false, "&sup2;", "^2", "²"),
    ("sup3", "\\textthreesuperior{}", false, "&sup3;", "^3", "³"),
    ("radic", "\\sqrt{\\,}", true, "&radic;", "[square root]", "√"),
    ("sum", "\\sum", true, "&sum;", "[sum]", "∑"),
    ("prod", "\\prod", true, "&prod;", "[product]", "∏"),
    ("micro", "\\textmu{}", false, "&micro;", "micro", "µ"),
    ("macr", "\\textasciimacron{}", false, "&macr;", "[macron]", "¯"),
    ("deg", "\\textdegree{}", false, "&deg;", "degree", "°"),
    ("prime", "\\prime", true, "&prime;", "'", "′"),
    ("Prime", "\\prime{}\\prime", true, "&Prime;", "''", "″"),
    ("infin", "\\infty", true, "&infin;", "[infinity]", "∞"),
    ("infty", "\\infty", true, "&infin;", "[infinity]", "∞"),
    ("prop", "\\propto", true, "&prop;", "[proportional to]", "∝"),
    ("propto", "\\propto", true, "&prop;", "[proportional to]", "∝"),
    ("not", "\\textlnot{}", false, "&not;", "[angled dash]", "¬"),
    ("neg", "\\neg{}", true, "&not;", "[angled dash]", "¬"),
    ("land", "\\land", true, "&and;", "[logical and]", "∧"),
    ("wedge", "\\wedge", true, "&and;", "[logical and]", "∧"),
    ("lor", "\\lor", true, "&or;", "[logical or]", "∨"),
    ("vee", "\\vee", true, "&or;", "[logical or]", "∨"),
    ("cap", "\\cap", true, "&cap;", "[intersection]", "∩"),
    ("cup", "\\cup", true, "&cup;", "[union]", "∪"),
    ("smile", "\\smile", true, "&smile;", "[cup product]", "⌣"),
    ("frown", "\\frown", true, "&frown;", "[Cap product]", "⌢"),
    ("int", "\\int", true, "&int;", "[integral]", "∫"),
    ("therefore", "\\therefore", true, "&there4;", "[therefore]", "∴"),
    ("there4", "\\therefore", true, "&there4;", "[therefore]", "∴"),
    ("because", "\\because", true, "&because;", "[because]", "∵"),
    ("sim", "\\sim", true, "&sim;", "~", "∼"),
    ("cong", "\\cong", true, "&cong;", "[approx. equal to]", "≅"),
    ("simeq", "\\simeq", true, "&cong;", "[approx. equal to]", "≅"),
    ("asymp", "\\asymp", true, "&asymp;", "[almost equal to]", "≈"),
    ("approx", "\\approx", true, "&asymp;", "[almost equal to]", "≈"),
    ("ne", "\\ne", true, "&ne;", "[not equal to]", "≠"),
    ("neq", "\\neq", true, "&ne;", "[not equal to]", "≠"),
    ("equiv", "\\equiv", true, "&equiv;", "[identical to]", "≡"),
    ("triangleq", "\\triangleq", true, "&triangleq;", "[defined to]", "≜"),
    ("le", "\\le", true, "&le;", "<=", "≤"),
    ("leq", "\\le", true, "&le;", "<=", "≤"),
    ("ge", "\\ge", true, "&ge;", ">=", "≥"),
    ("geq", "\\ge", true, "&ge;", ">=", "≥"),
    ("lessgtr", "\\lessgtr", true, "&lessgtr;", "[less than or greater than]", "≶"),
    ("lesseqgtr", "\\lesseqgtr", true, "&lesseqgtr;", "[less than or equal or greater than or equal]", "⋚"),
    ("ll", "\\ll", true, "&Lt;", "<<", "≪"),
    ("Ll", "\\lll", true, "&Ll;", "<<<", "⋘"),
    ("lll", "\\lll", true, "&Ll;", "<<<", "⋘"),
    ("gg", "\\gg", true, "&Gt;", ">>", "≫"),
    ("Gg", "\\ggg", true, "&Gg;", ">>>", "⋙"),
    ("ggg", "\\ggg", true, "&Gg;", ">>>", "⋙"),
    ("prec", "\\prec", true, "&pr;", "[precedes]", "≺"),
    ("preceq", "\\preceq", true, "&prcue;", "[precedes or equal]", "≼"),
    ("preccurlyeq", "\\preccurlyeq", true, "&prcue;", "[precedes or equal]", "≼"),
    ("succ", "\\succ", true, "&sc;", "[succeeds]", "≻"),
    ("succeq", "\\succeq", true, "&sccue;", "[succeeds or equal]", "≽"),
    ("succcurlyeq", "\\succcurlyeq", true, "&sccue;", "[succeeds or equal]", "≽"),
    ("sub", "\\subset", true, "&sub;", "[subset of]", "⊂"),
    ("subset", "\\subset", true, "&sub;", "[subset of]", "⊂"),
    ("sup", "\\supset", true, "&sup;", "[superset of]", "⊃"),
    ("supset", "\\supset", true, "&sup;", "[superset of]", "⊃"),
    ("nsub", "\\not\\subset", true, "&nsub;", "[not a subset of]", "⊄"),
    ("sube", "\\subseteq", true, "&sube;", "[subset of or equal to]", "⊆"),
    ("nsup", "\\not\\supset", true, "&nsup;", "[not a superset of]", "⊅"),
    ("supe", "\\supseteq", true, "&supe;", "[superset of or equal to]", "⊇"),
    ("setminus", "\\setminus", true, "&setminus;", "\\", "⧵"),
    ("forall", "\\forall", true, "&forall;", "[for all]", "∀"),
    ("exist", "\\exists", true, "&exist;", "[there exists]", "∃"),
    ("exists", "\\exists", true, "&exist;", "[there exists]", "∃"),
    ("nexist", "\\nexists", true, "&exist;", "[there does not exists]", "∄"),
    ("nexists", "\\nexists", true, "&exist;", "[there does not exists]", "∄"),
    ("empty", "\\emptyset", true, "&empty;", "[empty set]", "∅"),
    ("emptyset", "\\emptyset", true, "&empty;", "[empty set]", "∅"),
    ("isin", "\\in", true, "&isin;", "[element of]", "∈"),
    ("in", "\\in", true, "&isin;", "[element of]", "∈"),
    ("notin", "\\notin", true, "&notin;", "[not an element of]", "∉"),
    ("ni", "\\ni", true, "&ni;", "[contains as member]", "∋"),
    ("nabla", "\\nabla", true, "&nabla;", "[nabla]", "∇"),
    ("ang", "\\angle", true, "&ang;", "[angle]", "∠"),
    ("angle", "\\angle", true, "&ang;", "[angle]", "∠"),
    ("perp", "\\perp", true, "&perp;", "[up tack]", "⊥"),
    ("parallel", "\\parallel", true, "&parallel;", "||", "∥"),
    ("sdot", "\\cdot", true, "&sdot;", "[dot]", "⋅"),
    ("cdot", "\\cdot", true, "&sdot;", "[dot]", "⋅"),
    ("lceil", "\\lceil", true, "&lceil;", "[left ceiling]", "⌈"),
    ("rceil", "\\rceil", true, "&rceil;", "[right ceiling]", "⌉"),
    ("lfloor", "\\lfloor", true, "&lfloor;", "[left floor]", "⌊"),
    ("rfloor", "\\rfloor", true, "&rfloor;", "[right floor]", "⌋"),
    ("lang", "\\langle", true, "&lang;", "<", "⟨"),
    ("rang", "\\rangle", true, "&rang;", ">", "⟩"),
    ("langle", "\\langle", true, "&lang;", "<", "⟨"),
    ("rangle", "\\rangle", true, "&rang;", ">", "⟩"),
    ("hbar", "\\hbar", true, "&hbar;", "hbar", "ℏ"),
    ("mho", "\\mho", true, "&mho;", "mho", "℧"),
    // Arrows
    ("larr", "\\leftarrow", true, "&larr;", "<-", "←"),
    ("leftarrow", "\\leftarrow", true, "&larr;", "<-", "←"),
    ("gets", "\\gets", true, "&larr;", "<-", "←"),
    ("lArr", "\\Leftarrow", true, "&lArr;", "<=", "⇐"),
    ("Leftarrow", "\\Leftarrow", true, "&lArr;", "<=", "⇐"),
    ("uarr", "\\uparrow", true, "&uarr;", "[uparrow]", "↑"),
    ("uparrow", "\\uparrow", true, "&uarr;", "[uparrow]", "↑"),
    ("uArr", "\\Uparrow", true, "&uArr;", "[dbluparrow]", "⇑"),
    ("Uparrow", "\\Uparrow", true, "&uArr;", "[dbluparrow]", "⇑"),
    ("rarr", "\\rightarrow", true, "&rarr;", "->", "→"),
    ("to", "\\to", true, "&rarr;", "->", "→"),
    ("rightarrow", "\\rightarrow", true, "&rarr;", "->", "→"),
    ("rArr", "\\Rightarrow", true, "&rArr;", "=>", "⇒"),
    ("Rightarrow", "\\Rightarrow", true, "&rArr;", "=>", "⇒"),
    ("darr", "\\downarrow", true, "&darr;", "[downarrow]", "↓"),
    ("downarrow", "\\downarrow", true, "&darr;", "[downarrow]", "↓"),
    ("dArr", "\\Downarrow", true, "&dArr;", "[dbldownarrow]", "⇓"),
    ("Downarrow", "\\Downarrow", true, "&dArr;", "[dbldownarrow]", "⇓"),
    ("harr", "\\leftrightarrow", true, "&harr;", "<->", "↔"),
    ("leftrightarrow", "\\leftrightarrow", true, "&harr;", "<->", "↔"),
    ("hArr", "\\Leftrightarrow", true, "&hArr;", "<=>", "⇔"),
    ("Leftrightarrow", "\\Leftrightarrow", true, "&hArr;", "<=>", "⇔"),
    ("crarr", "\\hookleftarrow", true, "&crarr;", "<-'", "↵"),
    ("hookleftarrow", "\\hookleftarrow", true, "&crarr;", "<-'", "↵"),
    // Function names
    ("arccos", "\\arccos", true, "arccos", "arccos", "arccos"),
    ("arcsin", "\\arcsin", true, "arcsin", "arcsin", "arcsin"),
    ("arctan", "\\arctan", true, "arctan", "arctan", "arctan"),
    ("arg", "\\arg", true, "arg", "arg", "arg"),
    ("cos", "\\cos", true, "cos", "cos", "cos"),
    ("cosh", "\\cosh", true, "cosh", "cosh", "cosh"),
    ("cot", "\\cot", true, "cot", "cot", "cot"),
    ("coth", "\\coth", true, "coth", "coth", "coth"),
    ("csc", "\\csc", true, "csc", "csc", "csc"),
    ("det", "\\det", true, "det", "det", "det"),
    ("dim", "\\dim", true, "dim", "dim", "dim"),
    ("exp", "\\exp", true, "exp", "exp", "exp"),
    ("gcd", "\\gcd", true, "gcd", "gcd", "gcd"),
    ("hom", "\\hom", true, "hom", "hom", "hom"),
    ("inf", "\\inf", true, "inf", "inf", "inf"),
    ("ker", "\\ker", true, "ker", "ker", "ker"),
    ("lg", "\\lg", true, "lg", "lg", "lg"),
    ("lim", "\\lim", true, "lim", "lim", "lim"),
    ("liminf", "\\liminf", true, "liminf", "liminf", "liminf"),
    ("limsup", "\\limsup", true, "limsup", "limsup", "limsup"),
    ("ln", "\\ln", true, "ln", "ln", "ln"),
    ("log", "\\log", true, "log", "log", "log"),
    ("max", "\\max", true, "max", "max", "max"),
    ("min", "\\min", true, "min", "min", "min"),
    ("Pr", "\\Pr", true, "Pr", "Pr", "Pr"),
    ("sec", "\\sec", true, "sec", "sec", "sec"),
    ("sin", "\\sin", true, "sin", "sin", "sin"),
    ("sinh", "\\sinh", true, "sinh", "sinh", "sinh"),
    ("tan", "\\tan", true, "tan", "tan", "tan"),
    ("tanh", "\\tanh", true, "tanh", "tanh", "tanh"),
    // Signs & Symbols
    ("bull", "\\textbullet{}", false, "&bull;", "*", "•"),
    ("bullet", "\\textbullet{}", false, "&bull;", "*", "•"),
    ("star", "\\star", true, "*", "*", "⋆"),
    ("lowast", "\\ast", true, "&lowast;", "*", "∗"),
    ("ast", "\\ast", true, "&lowast;", "*", "*"),
    ("odot", "\\odot", true, "o", "[circled dot]", "ʘ"),
    ("oplus", "\\oplus", true, "&oplus;", "[circled plus]", "⊕"),
    ("otimes", "\\otimes", true, "&otimes;", "[circled times]", "⊗"),
    ("check", "\\checkmark", true, "&checkmark;", "[checkmark]", "✓"),
    ("checkmark", "\\checkmark", true, "&check;", "[checkmark]", "✓"),
    // Miscellaneous (seen in Mule)
    ("para", "\\P{}", false, "&para;", "[pilcrow]", "¶"),
    ("ordf", "\\textordfeminine{}", false, "&ordf;", "_a_", "ª"),
    ("ordm", "\\textordmasculine{}", false, "&ordm;", "_o_", "º"),
    ("cedil", "\\c{}", false, "&cedil;", "[cedilla]", "¸"),
    ("oline", "\\overline{~}", true, "&oline;", "[overline]", "‾"),
    ("uml", "\\textasciidieresis{}", false, "&uml;", "[diaeresis]", "¨"),
    ("zwnj", "\\/{}", false, "&zwnj;", "", "\u{200c}"),
    ("zwj", "", false, "&zwj;", "", "\u{200d}"),
    ("lrm", "", false, "&lrm;", "", "\u{200e}"),
    ("rlm", "", false, "&rlm;", "", "\u{200f}"),
    // Smilies
    ("smiley", "\\ddot\\smile", true, "&#9786;", ":-)", "☺"),
    ("blacksmile", "\\ddot\\smile", true, "&#9787;", ":-)", "☻"),
    ("sad", "\\ddot\\frown", true, "&#9785;", ":-(", "☹"),
    ("frowny", "\\ddot\\frown", true, "&#9785;", ":-(", "☹"),
    // Suits
    ("clubs", "\\clubsuit", true, "&clubs;", "[clubs]", "♣"),
    ("clubsuit", "\\clubsuit", true, "&clubs;", "[clubs]", "♣"),
    ("spades", "\\spadesuit", true, "&spades;", "[spades]", "♠"),
    ("spadesuit", "\\spadesuit", true, "&spades;", "[spades]", "♠"),
    ("hearts", "\\heartsuit", true, "&hearts;", "[hearts]", "♥"),
    ("heartsuit", "\\heartsuit", true, "&heartsuit;", "[hearts]", "♥"),
    ("diams", "\\diamondsuit", true, "&diams;", "[diamonds]", "◆"),
    ("diamondsuit", "\\diamondsuit", true, "&diams;", "[diamonds]", "◆"),
    ("diamond", "\\diamondsuit", true, "&diamond;", "[diamond]", "◆"),
    ("Diamond", "\\diamondsuit", true, "&diamond;", "[diamond]", "◆"),
    ("loz", "\\lozenge", true, "&loz;", "[lozenge]", "⧫"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolves_greek_letters() {
        let alpha = get_entity("alpha").expect("alpha is defined");
        assert_eq!(alpha.utf8, "α");
        assert_eq!(alpha.latex, "\\alpha");
        assert!(alpha.latex_math);
        assert_eq!(get_entity("Omega").map(|e| e.utf8), Some("Ω"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(get_entity("Delta").map(|e| e.utf8), Some("Δ"));
        assert_eq!(get_entity("delta").map(|e| e.utf8), Some("δ"));
        assert!(!is_valid_entity("ALPHA"));
    }

    #[test]
    fn unknown_names_are_not_found() {
        assert!(!is_valid_entity("notanentity"));
        assert!(get_entity("").is_none());
    }

    #[test]
    fn covers_arrows_currency_and_typography() {
        assert_eq!(get_entity("rarr").map(|e| e.utf8), Some("→"));
        assert_eq!(get_entity("euro").map(|e| e.html), Some("&euro;"));
        assert_eq!(get_entity("mdash").map(|e| e.latex), Some("---"));
        assert_eq!(get_entity("nbsp").map(|e| e.utf8), Some("\u{a0}"));
        assert_eq!(get_entity("frac12").map(|e| e.utf8), Some("½"));
    }

    #[test]
    fn names_are_unique() {
        let names: Vec<&str> = entity_names().collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
        assert!(names.len() > 300);
    }
}
