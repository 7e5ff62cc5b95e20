//! Demo catalog loaded into the in-memory store when no database is configured.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use business::domain::category::model::Category;
use business::domain::category::value_objects::Slug;
use business::domain::product::model::{Product, ProductProps};

struct CategorySeed {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    seo_description: &'static str,
}

const CATEGORIES: [CategorySeed; 3] = [
    CategorySeed {
        name: "Bongs",
        slug: "bongs",
        description: "Bongs de vidro e acrílico de alta qualidade",
        seo_description: "Encontre os melhores bongs de vidro e acrílico na Mushco Headshop",
    },
    CategorySeed {
        name: "Acessórios",
        slug: "acessorios",
        description: "Dichavadores, piteiras, isqueiros e outros acessórios",
        seo_description: "Acessórios essenciais para sua experiência",
    },
    CategorySeed {
        name: "Vaporizadores",
        slug: "vaporizadores",
        description: "Vaporizadores portáteis e de mesa",
        seo_description: "Vaporizadores de alta qualidade para uma experiência premium",
    },
];

pub fn categories() -> Vec<Category> {
    let now = Utc::now();
    CATEGORIES
        .iter()
        .zip(1..)
        .map(|(seed, order)| {
            Category::from_repository(
                Uuid::new_v4(),
                seed.name.to_string(),
                Slug::from_repository(seed.slug.to_string()),
                Some(format!("/images/category-{}.jpg", seed.slug)),
                seed.description.to_string(),
                true,
                order,
                Some(format!("{} - Mushco Headshop", seed.name)),
                Some(seed.seo_description.to_string()),
                now,
                now,
            )
        })
        .collect()
}

struct ProductSeed {
    name: &'static str,
    cents: i64,
    original_cents: Option<i64>,
    image: &'static str,
    category: &'static str,
    description: &'static str,
    rating: f64,
    review_count: u32,
    stock: Option<u32>,
    is_best_seller: bool,
    is_new: bool,
    features: &'static [&'static str],
    tags: &'static [&'static str],
}

const PRODUCTS: [ProductSeed; 8] = [
    ProductSeed {
        name: "Bong de Vidro Premium",
        cents: 29_999,
        original_cents: Some(34_999),
        image: "/images/bong-premium.jpg",
        category: "bongs",
        description: "Bong de vidro borossilicato de alta qualidade",
        rating: 4.8,
        review_count: 24,
        stock: Some(15),
        is_best_seller: true,
        is_new: false,
        features: &["Vidro borossilicato", "Percolador duplo", "Altura de 35cm"],
        tags: &["vidro", "premium", "percolador"],
    },
    ProductSeed {
        name: "Bong de Acrílico Colorido",
        cents: 8_990,
        original_cents: None,
        image: "/images/bong-acrilico.jpg",
        category: "bongs",
        description: "Bong leve e resistente, ideal para iniciantes",
        rating: 4.2,
        review_count: 31,
        stock: Some(40),
        is_best_seller: false,
        is_new: false,
        features: &["Acrílico resistente", "Fácil limpeza"],
        tags: &["acrilico", "colorido"],
    },
    ProductSeed {
        name: "Mini Bong de Vidro",
        cents: 12_990,
        original_cents: None,
        image: "/images/mini-bong.jpg",
        category: "bongs",
        description: "Compacto e discreto, com base reforçada",
        rating: 4.5,
        review_count: 12,
        stock: Some(0),
        is_best_seller: false,
        is_new: true,
        features: &["Altura de 15cm", "Base reforçada"],
        tags: &["vidro", "compacto"],
    },
    ProductSeed {
        name: "Dichavador de Metal 4 Partes",
        cents: 4_990,
        original_cents: Some(5_990),
        image: "/images/dichavador-metal.jpg",
        category: "acessorios",
        description: "Dichavador de alumínio aeronáutico com peneira para pólen",
        rating: 4.7,
        review_count: 89,
        stock: None,
        is_best_seller: true,
        is_new: false,
        features: &["Alumínio aeronáutico", "Ímã de neodímio", "Peneira fina"],
        tags: &["metal", "dichavador"],
    },
    ProductSeed {
        name: "Piteira de Vidro",
        cents: 1_990,
        original_cents: None,
        image: "/images/piteira-vidro.jpg",
        category: "acessorios",
        description: "Piteira reutilizável de vidro temperado",
        rating: 4.4,
        review_count: 57,
        stock: None,
        is_best_seller: false,
        is_new: false,
        features: &["Reutilizável", "Vidro temperado"],
        tags: &["vidro", "piteira"],
    },
    ProductSeed {
        name: "Isqueiro Recarregável",
        cents: 2_490,
        original_cents: None,
        image: "/images/isqueiro.jpg",
        category: "acessorios",
        description: "Isqueiro com chama tipo maçarico",
        rating: 4.0,
        review_count: 18,
        stock: Some(60),
        is_best_seller: false,
        is_new: true,
        features: &["Chama ajustável"],
        tags: &["isqueiro"],
    },
    ProductSeed {
        name: "Vaporizador Portátil",
        cents: 89_900,
        original_cents: Some(99_900),
        image: "/images/vaporizador-portatil.jpg",
        category: "vaporizadores",
        description: "Vaporizador portátil com controle preciso de temperatura",
        rating: 4.6,
        review_count: 41,
        stock: Some(8),
        is_best_seller: true,
        is_new: false,
        features: &["Bateria de 2h", "Aquecimento por convecção", "Display digital"],
        tags: &["portatil", "digital"],
    },
    ProductSeed {
        name: "Vaporizador de Mesa",
        cents: 159_900,
        original_cents: None,
        image: "/images/vaporizador-mesa.jpg",
        category: "vaporizadores",
        description: "Vaporizador de mesa com balão e controle remoto",
        rating: 4.9,
        review_count: 9,
        stock: Some(3),
        is_best_seller: false,
        is_new: true,
        features: &["Sistema de balão", "Controle remoto"],
        tags: &["mesa", "premium"],
    },
];

pub fn products() -> Vec<Product> {
    let now = Utc::now();
    PRODUCTS
        .iter()
        .map(|seed| {
            Product::from_repository(
                Uuid::new_v4(),
                ProductProps {
                    name: seed.name.to_string(),
                    price: Decimal::new(seed.cents, 2),
                    original_price: seed.original_cents.map(|c| Decimal::new(c, 2)),
                    image: seed.image.to_string(),
                    images: vec![seed.image.to_string()],
                    category: seed.category.to_string(),
                    description: seed.description.to_string(),
                    rating: seed.rating,
                    review_count: seed.review_count,
                    in_stock: true,
                    stock: seed.stock,
                    is_best_seller: seed.is_best_seller,
                    is_new: seed.is_new,
                    features: seed.features.iter().map(|f| f.to_string()).collect(),
                    tags: seed.tags.iter().map(|t| t.to_string()).collect(),
                },
                now,
                now,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_seed_products_only_into_seeded_categories() {
        let slugs: Vec<String> = categories()
            .into_iter()
            .map(|c| c.slug.as_str().to_string())
            .collect();

        assert!(products().iter().all(|p| slugs.contains(&p.category)));
    }

    #[test]
    fn should_mark_zero_stock_products_as_sold_out() {
        let products = products();
        let mini = products
            .iter()
            .find(|p| p.name == "Mini Bong de Vidro")
            .unwrap();

        assert!(!mini.in_stock);
    }

    #[test]
    fn should_number_categories_in_display_order() {
        let orders: Vec<i32> = categories().iter().map(|c| c.display_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }
}
