//! カテゴリ別キーワード表
//!
//! 一般名称とブランド名を小文字で保持する。実行時に変更されることはない。
//! 表の並びは `Category::ALL` と同じで、分類の同点判定はこの順序で決まる。

use crate::category::Category;

/// カテゴリ → キーワード一覧（小文字）
pub const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Vodka,
        &[
            "vodka", "водка", "wódka",
            // ブランド
            "absolut", "grey goose", "belvedere", "smirnoff", "titos", "ketel one",
            "stolichnaya", "ciroc", "skyy", "finlandia", "reyka", "chopin",
        ],
    ),
    (
        Category::Whiskey,
        &[
            "whiskey", "whisky", "bourbon", "scotch", "rye", "tennessee", "single malt", "blended",
            // ブランド
            "jack daniels", "jack daniel's", "jim beam", "makers mark", "maker's mark",
            "wild turkey", "bulleit", "woodford", "four roses", "knob creek",
            "johnnie walker", "chivas", "glenfiddich", "glenlivet", "macallan",
            "jameson", "bushmills", "tullamore", "crown royal", "canadian club",
        ],
    ),
    (
        Category::Rum,
        &[
            "rum", "ron", "rhum", "cachaça", "cachaca",
            // ブランド
            "bacardi", "captain morgan", "havana club", "mount gay", "appleton",
            "diplomatico", "el dorado", "zacapa", "flor de cana", "plantation",
            "kraken", "sailor jerry", "malibu", "myers", "pitu",
        ],
    ),
    (
        Category::Gin,
        &[
            "gin", "genever", "london dry", "plymouth",
            // ブランド
            "tanqueray", "bombay", "hendricks", "hendrick's", "beefeater", "gordon",
            "aviation", "botanist", "monkey 47", "sipsmith", "roku", "malfy",
        ],
    ),
    (
        Category::Tequila,
        &[
            "tequila", "mezcal", "reposado", "añejo", "anejo", "blanco", "plata",
            // ブランド
            "patron", "don julio", "herradura", "casamigos", "clase azul",
            "espolon", "olmeca", "jose cuervo", "el jimador", "codigo", "1800",
        ],
    ),
    (
        Category::Brandy,
        &[
            "brandy", "cognac", "armagnac", "pisco", "calvados",
            // ブランド
            "hennessy", "remy martin", "courvoisier", "martell", "hine",
            "pierre ferrand", "torres", "metaxa", "fundador",
        ],
    ),
    (
        Category::Liqueur,
        &[
            "liqueur", "amaro", "aperol", "campari", "triple sec", "cointreau",
            "kahlua", "baileys", "amaretto", "sambuca", "schnapps", "creme",
            "limoncello", "frangelico", "disaronno", "jagermeister", "fernet",
            "chartreuse", "benedictine", "drambuie", "st germain", "pimms",
        ],
    ),
    (
        Category::Wine,
        &[
            "wine", "vino", "vin", "champagne", "prosecco", "cava", "vermouth",
            "sparkling", "brut", "spumante", "martini", "cinzano", "dolin",
            "moet", "veuve", "dom perignon",
        ],
    ),
    (
        Category::Beer,
        &[
            "beer", "ale", "lager", "ipa", "stout", "pilsner", "porter",
            "biere", "cerveza", "piwo", "pivo",
            "budweiser", "corona", "heineken", "guinness", "stella",
        ],
    ),
    (
        Category::Other,
        &[
            "sake", "soju", "absinthe", "aquavit", "ouzo", "raki", "arak",
            "grappa", "slivovitz", "palinka", "baijiu",
        ],
    ),
];

/// 全カテゴリのキーワードを走査
pub fn all_keywords() -> impl Iterator<Item = &'static str> {
    KEYWORD_TABLE.iter().flat_map(|(_, keywords)| keywords.iter().copied())
}
