//! Mock catalog the storefront starts with.

use once_cell::sync::Lazy;

use super::aggregate::{Product, ProductColor};

pub const ALL_CATEGORIES: &str = "Todos";
pub const UNCATEGORIZED: &str = "Sem Categoria";

pub const DEFAULT_CATEGORIES: [&str; 5] = [
    ALL_CATEGORIES,
    "Masculino",
    "Feminino",
    "Acessórios",
    "Promoção",
];

fn color(name: &str, hex: &str) -> ProductColor {
    ProductColor {
        name: name.to_string(),
        hex: hex.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn unsplash(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?auto=format&fit=crop&q=80&w=800",
        photo
    )
}

pub static SEED_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            id: "1".to_string(),
            name: "Camisa de Linho Clássica".to_string(),
            price: 89.99,
            description: "Camisa de linho respirável perfeita para noites de verão. \
                Confeccionada em linho premium europeu 100%, esta peça oferece conforto \
                inigualável e uma silhueta atemporal que transita facilmente da praia ao jantar."
                .to_string(),
            category: "Masculino".to_string(),
            sub_category: None,
            image: unsplash("photo-1594932224828-b4b05a832fe3"),
            secondary_images: vec![
                unsplash("photo-1598033129183-c4f50c7176c8"),
                unsplash("photo-1589310243389-96a5483213a8"),
                unsplash("photo-1594932224423-f3c14c391781"),
            ],
            stock: 25,
            rating: 4.8,
            sizes: strings(&["P", "M", "G", "GG"]),
            colors: vec![
                color("Creme", "#F5F5DC"),
                color("Verde Sálvia", "#87A96B"),
                color("Azul Marinho", "#000080"),
            ],
        },
        Product {
            id: "2".to_string(),
            name: "Vestido de Seda para Noite".to_string(),
            price: 249.00,
            description: "Elegante vestido de seda para ocasiões formais. Apresenta um corte \
                enviesado que valoriza a silhueta, com um brilho sutil que captura a luz \
                lindamente. Perfeito para festas ou casamentos."
                .to_string(),
            category: "Feminino".to_string(),
            sub_category: None,
            image: unsplash("photo-1539109132345-64939c05c0f2"),
            secondary_images: vec![
                unsplash("photo-1515372039744-b8f02a3ae446"),
                unsplash("photo-1536640704018-9366d3a95c37"),
            ],
            stock: 12,
            rating: 4.9,
            sizes: strings(&["PP", "P", "M", "G"]),
            colors: vec![color("Esmeralda", "#50C878"), color("Preto", "#000000")],
        },
        Product {
            id: "3".to_string(),
            name: "Moletom Urban Street".to_string(),
            price: 65.50,
            description: "Moletom de algodão encorpado com design minimalista. Construído para \
                as ruas, apresentando caimento relaxado, costuras reforçadas e interior \
                escovado para máximo aquecimento e durabilidade."
                .to_string(),
            category: "Masculino".to_string(),
            sub_category: None,
            image: unsplash("photo-1556821840-3a63f95609a7"),
            secondary_images: vec![
                unsplash("photo-1556821840-d1645565d9a7"),
                unsplash("photo-1556821840-7e614a4505f0"),
                unsplash("photo-1556821840-8f92176d6a26"),
            ],
            stock: 40,
            rating: 4.5,
            sizes: strings(&["M", "G", "GG", "XG"]),
            colors: vec![color("Asfalto", "#454545"), color("Cinza Névoa", "#DCDCDC")],
        },
    ]
});
