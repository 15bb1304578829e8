//! Seed catalog fixtures: a populated flower catalog plus the static
//! location list backing delivery-address autocomplete.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Banner, Category, Product};

fn category(name: &str, slug: &str, description: &str, icon: &str) -> Category {
    Category {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: Some(description.to_string()),
        icon: Some(icon.to_string()),
    }
}

pub fn seed_categories() -> Vec<Category> {
    vec![
        category("Orkide", "orkide", "Şık, zarif ve kalıcı hediye", "🌸"),
        category("Gül", "gul", "Aşkın en klasik hali", "🌹"),
        category("Papatya / Gerbera", "papatya-gerbera", "Neşeli ve canlı çiçekler", "🌼"),
        category("Saksı Çiçekleri", "saksi-cicekleri", "Kalıcı saksı bitkileri", "🪴"),
        category("Lilyum", "lilyum", "Muhteşem kokulu çiçekler", "🌷"),
        category("Ayçiçeği", "aycicegi", "Güneş gibi parlak", "🌻"),
        category("Hüsnüyusuf", "husnuyusuf", "Romantik ve zarif", "💜"),
        category("Karanfil", "karanfil", "Geleneksel ve zarif", "🌺"),
        category("Geçmiş Olsun", "gecmis-olsun", "Sevdiklerinize şifa dileyin", "💐"),
        category("Yeni İş / Terfi", "yeni-is-terfi", "Başarıları kutlayın", "🎊"),
        category("Doğum / Yeni Bebek", "dogum-yeni-bebek", "Yeni hayatı kutlayın", "👶"),
        category("Yıl Dönümü", "yil-donumu", "Özel günlerinizi kutlayın", "💕"),
        category("Tasarım Çiçekler", "tasarim", "Özel aranjmanlar ve butik işler", "🎨"),
        category("Çiçek Buketleri", "cicek-buketleri", "Her ocasyon için buketler", "💐"),
        category("Antoryum", "antoryum", "Egzotik ve şık", "❤️"),
        category("Kokina", "kokina", "Yeni yılın gözdesi", "🎄"),
    ]
}

fn banner(image: &str, title: &str, link: &str, order: i32) -> Banner {
    Banner {
        id: Uuid::new_v4().to_string(),
        image: image.to_string(),
        title: Some(title.to_string()),
        link: Some(link.to_string()),
        order,
    }
}

pub fn seed_banners() -> Vec<Banner> {
    vec![
        banner(
            "https://images.unsplash.com/photo-1487530811176-3780de880c2d?w=1200&h=400&fit=crop",
            "Yaz Koleksiyonu",
            "/kategori/tasarim",
            1,
        ),
        banner(
            "https://images.unsplash.com/photo-1561181286-d3fee7d55364?w=1200&h=400&fit=crop",
            "Güller Festivali",
            "/kategori/gul",
            2,
        ),
        banner(
            "https://images.unsplash.com/photo-1508610048659-a06b669e3321?w=1200&h=400&fit=crop",
            "Orkide Şıklığı",
            "/kategori/orkide",
            3,
        ),
    ]
}

fn product(
    title: &str,
    description: &str,
    price: i64,
    category: &str,
    image: &str,
    bestseller: bool,
    badge: &str,
) -> Product {
    Product {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        price,
        category: category.to_string(),
        image: format!("https://images.unsplash.com/{image}?w=400&h=400&fit=crop"),
        badge: Some(badge.to_string()),
        description: Some(description.to_string()),
        is_bestseller: bestseller,
        created_at: Utc::now(),
    }
}

pub fn seed_products() -> Vec<Product> {
    let same_day = "Aynı Gün Teslimat";
    let premium = "Premium";
    vec![
        // Güller
        product(
            "Kırmızı Gül Buketi",
            "11 adet kırmızı gülden oluşan romantik buket",
            599,
            "gul",
            "photo-1518621736915-f3b1c41bfd00",
            true,
            same_day,
        ),
        product(
            "Pembe Gül Aranjmanı",
            "21 adet pembe gül özel vazo içinde",
            899,
            "gul",
            "photo-1455659817273-f96807779a8a",
            true,
            same_day,
        ),
        product(
            "Beyaz Gül Buketi",
            "15 adet beyaz gül zarif ambalajda",
            749,
            "gul",
            "photo-1582794543139-8ac9cb0f7b11",
            false,
            same_day,
        ),
        product(
            "Karışık Renkli Güller",
            "25 adet karışık renkli gül sepeti",
            1099,
            "gul",
            "photo-1494972308805-463bc619d34e",
            false,
            same_day,
        ),
        product(
            "Sarı Gül Buketi",
            "9 adet sarı gül dostluk buketi",
            449,
            "gul",
            "photo-1586968304848-f29e3c95cb2c",
            false,
            same_day,
        ),
        product(
            "Lüks Gül Kutusu",
            "50 adet premium gül özel kutuda",
            2499,
            "gul",
            "photo-1548586196-aa5803b77379",
            false,
            premium,
        ),
        // Orkideler
        product(
            "Beyaz Orkide",
            "Tek dallı beyaz orkide seramik saksıda",
            799,
            "orkide",
            "photo-1567748157439-651aca2ff064",
            true,
            same_day,
        ),
        product(
            "Mor Orkide",
            "Çift dallı mor orkide premium saksıda",
            1299,
            "orkide",
            "photo-1610397648930-477b8c7f0943",
            true,
            same_day,
        ),
        product(
            "Pembe Orkide",
            "Tek dallı pembe orkide zarif ambalajda",
            849,
            "orkide",
            "photo-1566873535350-a3f5d4a804b7",
            false,
            same_day,
        ),
        product(
            "Sarı Orkide",
            "Nadir sarı orkide özel seramik saksıda",
            999,
            "orkide",
            "photo-1612363148951-15f16817648f",
            false,
            same_day,
        ),
        product(
            "İkili Orkide Set",
            "2 adet tek dallı orkide şık kutuda",
            1599,
            "orkide",
            "photo-1590755726405-6c2e1f9a7dfe",
            false,
            premium,
        ),
        // Tasarım
        product(
            "Butik Aranjman",
            "Mevsim çiçeklerinden özel tasarım",
            699,
            "tasarim",
            "photo-1563241527-3004b7be0ffd",
            true,
            same_day,
        ),
        product(
            "Pastel Rüya",
            "Pastel tonlarda özel aranjman",
            899,
            "tasarim",
            "photo-1520763185298-1b434c919102",
            true,
            same_day,
        ),
        product(
            "Tropikal Esen",
            "Egzotik çiçeklerle tropikal tasarım",
            1199,
            "tasarim",
            "photo-1525310072745-f49212b5ac6d",
            false,
            premium,
        ),
        product(
            "Vintage Şıklık",
            "Klasik tarzda nostaljik buket",
            799,
            "tasarim",
            "photo-1561181286-d3fee7d55364",
            false,
            same_day,
        ),
        product(
            "Modern Minimalist",
            "Sade ve şık modern aranjman",
            649,
            "tasarim",
            "photo-1487530811176-3780de880c2d",
            false,
            same_day,
        ),
        // Papatya / Gerbera
        product(
            "Papatya Buketi",
            "Taze papatyalardan neşeli buket",
            399,
            "papatya-gerbera",
            "photo-1490750967868-88aa4486c946",
            false,
            same_day,
        ),
        product(
            "Gerbera Aranjmanı",
            "Renkli gerberalardan canlı aranjman",
            549,
            "papatya-gerbera",
            "photo-1518882605630-8eb573696572",
            false,
            same_day,
        ),
    ]
}

/// Cities and districts served by same-day delivery, matched by the
/// location autocomplete.
pub fn seed_locations() -> Vec<String> {
    [
        "İstanbul - Kadıköy",
        "İstanbul - Beşiktaş",
        "İstanbul - Şişli",
        "İstanbul - Üsküdar",
        "İstanbul - Bakırköy",
        "İstanbul - Beylikdüzü",
        "İstanbul - Maltepe",
        "Ankara - Çankaya",
        "Ankara - Keçiören",
        "Ankara - Yenimahalle",
        "İzmir - Konak",
        "İzmir - Karşıyaka",
        "İzmir - Bornova",
        "Bursa - Nilüfer",
        "Bursa - Osmangazi",
        "Antalya - Muratpaşa",
        "Antalya - Konyaaltı",
        "Adana - Seyhan",
        "Konya - Selçuklu",
        "Gaziantep - Şahinbey",
        "Kayseri - Melikgazi",
        "Mersin - Yenişehir",
        "Eskişehir - Tepebaşı",
        "Trabzon - Ortahisar",
        "Samsun - Atakum",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
