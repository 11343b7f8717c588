// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The static company catalog.
//!
//! Built once on first access. Catalog prose is French; see the crate docs.

use std::sync::OnceLock;

use crate::model::{IconId, MediaItem, MediaKind, Sector, Solution};
use crate::slug::slugify;

/// Hero image shared by every catalog entry.
const LOGO_URL: &str = "/logo/aiunivers.png";

/// Partner names shown on the home screen.
pub const PARTNERS: &[&str] = &["Ericsson", "Huawei"];

/// Technology names cycled through the home screen marquee.
pub const TECHNOLOGIES: &[&str] = &[
	"TensorFlow",
	"PyTorch",
	"Machine Learning",
	"Deep Learning",
	"Computer Vision",
	"Natural Language Processing",
	"React",
	"Next.js",
	"React Native",
	"Flutter",
	"Swift",
	"Kotlin",
	"TypeScript",
	"Node.js",
	"Python",
	"Docker",
	"Kubernetes",
	"AWS",
	"Azure",
	"Google Cloud",
	"Blockchain",
	"IoT",
	"5G Networks",
	"Cybersecurity",
	"DevOps",
	"Microservices",
	"GraphQL",
	"REST API",
	"PostgreSQL",
	"MongoDB",
];

static CATALOG: OnceLock<Vec<Sector>> = OnceLock::new();

/// All sectors in display order.
pub fn sectors() -> &'static [Sector] {
	CATALOG.get_or_init(build_catalog).as_slice()
}

/// Look up a sector by its slug.
pub fn find_sector_by_slug(slug: &str) -> Option<&'static Sector> {
	sectors().iter().find(|sector| sector.slug == slug)
}

/// Look up a solution by its slug within the named sector.
///
/// Returns `None` when the sector is unknown or when the solution does not
/// belong to that sector, even if another sector carries the slug.
pub fn find_solution_by_slug(sector_slug: &str, solution_slug: &str) -> Option<&'static Solution> {
	let sector = find_sector_by_slug(sector_slug)?;
	sector
		.solutions
		.iter()
		.find(|solution| solution.slug == solution_slug)
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|item| (*item).to_string()).collect()
}

fn logo_media(title: &str) -> MediaItem {
	MediaItem {
		kind: MediaKind::Image,
		url: LOGO_URL.to_string(),
		thumbnail: None,
		title: Some(title.to_string()),
	}
}

fn build_catalog() -> Vec<Sector> {
	vec![
		Sector {
			title: "Intelligence Artificielle".to_string(),
			description: "Transformez vos données en insights actionnables. Nos solutions d'IA sur mesure automatisent vos processus et optimisent vos opérations pour une croissance exponentielle.".to_string(),
			full_description: "L'intelligence artificielle est au cœur de la transformation digitale. Nos solutions d'IA sur mesure permettent aux entreprises d'automatiser leurs processus, d'optimiser leurs opérations et de prendre des décisions basées sur les données. Nous développons des systèmes d'IA adaptatifs qui s'améliorent continuellement et s'intègrent parfaitement à vos infrastructures existantes.".to_string(),
			slug: slugify("Intelligence Artificielle"),
			badge: "AI & Data".to_string(),
			icon: IconId::LightBulb,
			solutions: vec![
				Solution {
					title: "Machine Learning & Deep Learning".to_string(),
					description: "Modèles prédictifs avancés pour l'analyse de données complexes et la prise de décision automatisée.".to_string(),
					full_description: "Nos solutions de Machine Learning et Deep Learning transforment vos données en insights actionnables. Nous développons des modèles prédictifs personnalisés qui s'adaptent à vos besoins spécifiques, permettant une prise de décision automatisée et intelligente. Nos algorithmes apprennent continuellement de vos données pour améliorer leurs performances au fil du temps.".to_string(),
					slug: slugify("Machine Learning & Deep Learning"),
					icon: IconId::ChartBar,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("Architecture ML"), logo_media("Dashboard Analytics")],
					advantages: strings(&[
						"Prédictions précises avec une marge d'erreur minimale",
						"Apprentissage continu et amélioration automatique des performances",
						"Scalabilité pour gérer des volumes de données massifs",
						"Intégration transparente avec vos systèmes existants",
					]),
					target_clients: strings(&[
						"Entreprises de services financiers",
						"E-commerce et retail",
						"Industrie manufacturière",
						"Secteur de la santé",
					]),
					features: strings(&[
						"Modèles de régression et classification",
						"Réseaux de neurones profonds",
						"Traitement en temps réel",
						"API RESTful pour intégration",
					]),
					use_cases: strings(&[
						"Prédiction de la demande",
						"Détection de fraude",
						"Recommandation personnalisée",
						"Optimisation de la chaîne d'approvisionnement",
					]),
				},
				Solution {
					title: "Traitement du Langage Naturel (NLP)".to_string(),
					description: "Solutions de compréhension et génération de texte pour chatbots, analyse de sentiment et traduction automatique.".to_string(),
					full_description: "Nos solutions NLP permettent à vos systèmes de comprendre, analyser et générer du texte naturel. Nous développons des chatbots intelligents, des systèmes d'analyse de sentiment, et des moteurs de traduction automatique qui comprennent le contexte et les nuances du langage humain.".to_string(),
					slug: slugify("Traitement du Langage Naturel (NLP)"),
					icon: IconId::Chat,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("Chatbot Interface"), logo_media("Analyse de Sentiment")],
					advantages: strings(&[
						"Compréhension contextuelle avancée du langage naturel",
						"Support multilingue avec traduction automatique",
						"Analyse de sentiment en temps réel",
						"Génération de contenu intelligent",
					]),
					target_clients: strings(&[
						"Centres d'appels et support client",
						"Médias et éditeurs de contenu",
						"E-commerce et marketplaces",
						"Institutions financières",
					]),
					features: strings(&[
						"Chatbots conversationnels intelligents",
						"Analyse de sentiment et opinion mining",
						"Traduction automatique multilingue",
						"Résumé automatique de documents",
					]),
					use_cases: strings(&[
						"Service client automatisé 24/7",
						"Analyse de feedback clients",
						"Génération de contenu marketing",
						"Traduction de documents techniques",
					]),
				},
				Solution {
					title: "Computer Vision".to_string(),
					description: "Reconnaissance d'images et analyse vidéo pour l'automatisation industrielle et la surveillance intelligente.".to_string(),
					full_description: "Nos solutions de Computer Vision transforment les images et vidéos en données exploitables. Nous développons des systèmes de reconnaissance d'objets, de détection de visages, et d'analyse vidéo en temps réel pour l'automatisation industrielle, la surveillance intelligente et bien plus encore.".to_string(),
					slug: slugify("Computer Vision"),
					icon: IconId::Eye,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("Reconnaissance d'Images"), logo_media("Analyse Vidéo")],
					advantages: strings(&[
						"Détection et reconnaissance d'objets en temps réel",
						"Analyse vidéo automatisée pour surveillance",
						"Contrôle qualité automatisé",
						"Amélioration de la sécurité et de la productivité",
					]),
					target_clients: strings(&[
						"Industrie manufacturière",
						"Sécurité et surveillance",
						"Transport et logistique",
						"Commerce de détail",
					]),
					features: strings(&[
						"Reconnaissance faciale et d'objets",
						"Détection de mouvement et anomalies",
						"OCR avancé pour documents",
						"Analyse vidéo en streaming",
					]),
					use_cases: strings(&[
						"Contrôle qualité automatisé",
						"Surveillance intelligente",
						"Reconnaissance de plaques d'immatriculation",
						"Tri automatique de colis",
					]),
				},
			],
		},
		Sector {
			title: "Télécommunications".to_string(),
			description: "Infrastructures réseau de nouvelle génération. De la 5G à l'IoT, nous concevons des systèmes de communication ultra-performants pour l'ère digitale.".to_string(),
			full_description: "Les télécommunications modernes nécessitent des infrastructures robustes et évolutives. Nous concevons et déployons des réseaux de nouvelle génération, de la 5G à l'IoT, en passant par les solutions cloud. Nos systèmes garantissent une connectivité fiable, sécurisée et performante pour répondre aux besoins croissants des entreprises et des particuliers.".to_string(),
			slug: slugify("Télécommunications"),
			badge: "Telecom & Réseaux".to_string(),
			icon: IconId::Wifi,
			solutions: vec![
				Solution {
					title: "Infrastructure 5G".to_string(),
					description: "Déploiement et optimisation de réseaux 5G pour une connectivité ultra-rapide et une latence minimale.".to_string(),
					full_description: "Nous déployons et optimisons des infrastructures 5G de nouvelle génération pour offrir une connectivité ultra-rapide avec une latence minimale. Nos solutions garantissent une couverture optimale et des performances exceptionnelles pour les entreprises et les particuliers.".to_string(),
					slug: slugify("Infrastructure 5G"),
					icon: IconId::Wifi,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("Infrastructure 5G")],
					advantages: strings(&[
						"Débits ultra-rapides jusqu'à 10 Gbps",
						"Latence ultra-faible inférieure à 1ms",
						"Support de millions d'appareils connectés",
						"Couverture optimale avec technologies avancées",
					]),
					target_clients: strings(&[
						"Opérateurs télécoms",
						"Entreprises industrielles",
						"Villes intelligentes",
						"Centres de données",
					]),
					features: strings(&[
						"Déploiement d'antennes 5G",
						"Optimisation de réseau",
						"Gestion de la bande passante",
						"Monitoring en temps réel",
					]),
					use_cases: strings(&[
						"Réseaux d'entreprise privés 5G",
						"Connectivité IoT massive",
						"Télémédecine et chirurgie à distance",
						"Véhicules autonomes",
					]),
				},
				Solution {
					title: "IoT & Connectivité".to_string(),
					description: "Solutions IoT complètes pour connecter et gérer des milliers d'appareils intelligents.".to_string(),
					full_description: "Nos solutions IoT permettent de connecter et gérer des milliers d'appareils intelligents de manière centralisée. Nous offrons une plateforme complète pour la collecte, l'analyse et la gestion des données IoT, permettant une automatisation et une optimisation complètes de vos opérations.".to_string(),
					slug: slugify("IoT & Connectivité"),
					icon: IconId::Chip,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("Réseau IoT")],
					advantages: strings(&[
						"Gestion centralisée de milliers d'appareils",
						"Collecte et analyse de données en temps réel",
						"Automatisation complète des processus",
						"Réduction des coûts opérationnels",
					]),
					target_clients: strings(&[
						"Industrie 4.0",
						"Agriculture intelligente",
						"Bâtiments intelligents",
						"Logistique et transport",
					]),
					features: strings(&[
						"Plateforme de gestion IoT",
						"Protocoles multiples (MQTT, CoAP, etc.)",
						"Analytics et visualisation",
						"Alertes et notifications automatiques",
					]),
					use_cases: strings(&[
						"Monitoring d'équipements industriels",
						"Gestion énergétique intelligente",
						"Suivi de flotte de véhicules",
						"Agriculture de précision",
					]),
				},
			],
		},
		Sector {
			title: "Applications Web & Mobile".to_string(),
			description: "Expériences digitales exceptionnelles. Nous développons des applications natives et web qui redéfinissent les standards de performance et d'ergonomie.".to_string(),
			full_description: "Nous créons des expériences digitales exceptionnelles qui engagent vos utilisateurs et stimulent votre croissance. Nos applications web et mobiles allient performance, design moderne et fonctionnalités avancées. Que ce soit pour iOS, Android ou le web, nous développons des solutions qui redéfinissent les standards de l'industrie.".to_string(),
			slug: slugify("Applications Web & Mobile"),
			badge: "Digital Experience".to_string(),
			icon: IconId::DeviceMobile,
			solutions: vec![
				Solution {
					title: "Applications Web Progressives (PWA)".to_string(),
					description: "Applications web modernes avec performances natives et fonctionnalités offline.".to_string(),
					full_description: "Nous développons des Progressive Web Apps (PWA) qui combinent les meilleures fonctionnalités des applications web et mobiles. Nos PWA offrent des performances natives, fonctionnent offline, et peuvent être installées sur n'importe quel appareil, offrant une expérience utilisateur exceptionnelle.".to_string(),
					slug: slugify("Applications Web Progressives (PWA)"),
					icon: IconId::Globe,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("PWA Interface")],
					advantages: strings(&[
						"Performance native sans installation",
						"Fonctionnement offline complet",
						"Expérience utilisateur optimale",
						"Coûts de développement réduits",
					]),
					target_clients: strings(&[
						"E-commerce",
						"Médias et streaming",
						"Applications B2B",
						"Startups tech",
					]),
					features: strings(&[
						"Service Workers pour cache offline",
						"Notifications push",
						"Installation sur écran d'accueil",
						"Responsive design adaptatif",
					]),
					use_cases: strings(&[
						"Applications e-commerce mobiles",
						"Outils de productivité",
						"Applications de médias",
						"Dashboards d'entreprise",
					]),
				},
				Solution {
					title: "Applications Mobiles Natives".to_string(),
					description: "Développement iOS et Android avec React Native, Flutter ou natif pour des performances optimales.".to_string(),
					full_description: "Nous développons des applications mobiles natives pour iOS et Android en utilisant les technologies les plus modernes (React Native, Flutter, ou développement natif). Nos applications offrent des performances optimales, une expérience utilisateur fluide et un design moderne adapté à chaque plateforme.".to_string(),
					slug: slugify("Applications Mobiles Natives"),
					icon: IconId::DeviceMobile,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("App Mobile")],
					advantages: strings(&[
						"Performances natives optimales",
						"Accès aux fonctionnalités matérielles",
						"Expérience utilisateur native",
						"Publication sur App Store et Play Store",
					]),
					target_clients: strings(&[
						"Startups tech",
						"E-commerce",
						"Services financiers",
						"Médias et divertissement",
					]),
					features: strings(&[
						"Développement cross-platform (React Native, Flutter)",
						"Développement natif iOS/Android",
						"Intégration API et backend",
						"Tests et déploiement automatisés",
					]),
					use_cases: strings(&[
						"Applications bancaires mobiles",
						"Marketplaces mobiles",
						"Applications de fitness",
						"Plateformes de streaming",
					]),
				},
				Solution {
					title: "E-Commerce & Marketplaces".to_string(),
					description: "Plateformes e-commerce complètes avec gestion de paiement, inventaire et analytics avancés.".to_string(),
					full_description: "Nous créons des plateformes e-commerce et marketplaces complètes avec toutes les fonctionnalités nécessaires : gestion de paiement sécurisée, inventaire en temps réel, analytics avancés, et expérience utilisateur optimisée pour maximiser les conversions.".to_string(),
					slug: slugify("E-Commerce & Marketplaces"),
					icon: IconId::ShoppingBag,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("E-Commerce Platform")],
					advantages: strings(&[
						"Conversion optimisée avec UX moderne",
						"Gestion complète des paiements sécurisés",
						"Analytics avancés pour décisions data-driven",
						"Scalabilité pour gérer la croissance",
					]),
					target_clients: strings(&[
						"E-commerce et retail",
						"Marketplaces B2B et B2C",
						"Marques de mode et lifestyle",
						"Distributeurs en ligne",
					]),
					features: strings(&[
						"Catalogue produits avancé",
						"Gestion de panier et checkout",
						"Intégration paiements multiples",
						"Gestion d'inventaire en temps réel",
					]),
					use_cases: strings(&[
						"Boutiques en ligne complètes",
						"Marketplaces multi-vendeurs",
						"Applications de livraison",
						"Plateformes de dropshipping",
					]),
				},
			],
		},
		Sector {
			title: "LMS & E-Learning".to_string(),
			description: "Plateformes d'apprentissage intelligentes. Révolutionnez la formation avec nos systèmes LMS adaptatifs qui maximisent l'engagement et les résultats.".to_string(),
			full_description: "Révolutionnez la formation et l'éducation avec nos plateformes LMS intelligentes. Nos systèmes d'apprentissage adaptatifs utilisent l'IA pour personnaliser le parcours de chaque apprenant, maximiser l'engagement et améliorer les résultats. Que ce soit pour la formation en entreprise ou l'éducation en ligne, nos solutions transforment l'expérience d'apprentissage.".to_string(),
			slug: slugify("LMS & E-Learning"),
			badge: "EdTech".to_string(),
			icon: IconId::BookOpen,
			solutions: vec![
				Solution {
					title: "Plateforme LMS Complète".to_string(),
					description: "Système de gestion de l'apprentissage avec suivi des progrès, certifications et analytics.".to_string(),
					full_description: "Notre plateforme LMS complète offre tous les outils nécessaires pour gérer efficacement l'apprentissage : création de cours, suivi des progrès en temps réel, système de certifications, analytics avancés, et une interface intuitive pour les apprenants et les formateurs.".to_string(),
					slug: slugify("Plateforme LMS Complète"),
					icon: IconId::BookOpen,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("LMS Dashboard")],
					advantages: strings(&[
						"Gestion centralisée de tous les contenus pédagogiques",
						"Suivi détaillé des progrès des apprenants",
						"Certifications et badges automatisés",
						"Rapports et analytics complets",
					]),
					target_clients: strings(&[
						"Entreprises et formation professionnelle",
						"Établissements d'enseignement",
						"Organismes de formation",
						"Centres de certification",
					]),
					features: strings(&[
						"Création de cours interactifs",
						"Quiz et évaluations automatisées",
						"Forum et collaboration",
						"Bibliothèque de ressources",
					]),
					use_cases: strings(&[
						"Formation en entreprise",
						"Cours en ligne (MOOCs)",
						"Certifications professionnelles",
						"Onboarding des employés",
					]),
				},
				Solution {
					title: "Formation Adaptative IA".to_string(),
					description: "Parcours d'apprentissage personnalisés avec recommandations intelligentes basées sur l'IA.".to_string(),
					full_description: "Notre solution de formation adaptative utilise l'intelligence artificielle pour créer des parcours d'apprentissage personnalisés pour chaque apprenant. Le système analyse les performances, identifie les points faibles, et recommande automatiquement du contenu adapté pour maximiser l'efficacité de l'apprentissage.".to_string(),
					slug: slugify("Formation Adaptative IA"),
					icon: IconId::LightBulb,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("Formation Adaptative")],
					advantages: strings(&[
						"Parcours personnalisés pour chaque apprenant",
						"Recommandations intelligentes basées sur l'IA",
						"Amélioration continue des résultats",
						"Engagement et motivation accrus",
					]),
					target_clients: strings(&[
						"Établissements d'enseignement supérieur",
						"Centres de formation professionnelle",
						"Entreprises avec programmes de formation",
						"Plateformes EdTech",
					]),
					features: strings(&[
						"Analyse comportementale des apprenants",
						"Recommandation de contenu adaptatif",
						"Détection des difficultés d'apprentissage",
						"Ajustement automatique du rythme",
					]),
					use_cases: strings(&[
						"Formation personnalisée en entreprise",
						"Tutorat intelligent",
						"Préparation aux examens",
						"Formation continue adaptative",
					]),
				},
			],
		},
		Sector {
			title: "Cybersécurité".to_string(),
			description: "Protection entreprise de niveau militaire. Sécurisez vos actifs numériques avec nos solutions de cybersécurité proactives et nos audits approfondis.".to_string(),
			full_description: "La cybersécurité est essentielle dans un monde de plus en plus connecté. Nos solutions de protection de niveau entreprise sécurisent vos actifs numériques contre les menaces les plus sophistiquées. Nous proposons des audits approfondis, une surveillance 24/7 et des solutions de sécurité proactives pour protéger votre infrastructure et vos données.".to_string(),
			slug: slugify("Cybersécurité"),
			badge: "Cyber Défense".to_string(),
			icon: IconId::LockClosed,
			solutions: vec![
				Solution {
					title: "Audit & Pentesting".to_string(),
					description: "Évaluation complète de la sécurité de vos systèmes avec tests de pénétration et recommandations.".to_string(),
					full_description: "Nos audits de sécurité et tests de pénétration identifient les vulnérabilités de vos systèmes avant qu'elles ne soient exploitées. Nous effectuons des évaluations complètes, simulons des attaques réelles, et fournissons des recommandations détaillées pour renforcer votre sécurité.".to_string(),
					slug: slugify("Audit & Pentesting"),
					icon: IconId::ShieldCheck,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("Audit Sécurité")],
					advantages: strings(&[
						"Identification proactive des vulnérabilités",
						"Tests de pénétration réalistes",
						"Conformité réglementaire garantie",
						"Recommandations actionnables",
					]),
					target_clients: strings(&[
						"Institutions financières",
						"E-commerce et retail",
						"Organisations gouvernementales",
						"Entreprises tech",
					]),
					features: strings(&[
						"Audit de sécurité complet",
						"Tests de pénétration (pentesting)",
						"Analyse de code source",
						"Rapports détaillés avec priorités",
					]),
					use_cases: strings(&[
						"Audit de sécurité annuel",
						"Tests avant mise en production",
						"Conformité RGPD et standards",
						"Évaluation de risques",
					]),
				},
				Solution {
					title: "Surveillance & Détection".to_string(),
					description: "Monitoring 24/7 avec détection proactive des menaces et réponse automatisée aux incidents.".to_string(),
					full_description: "Notre système de surveillance 24/7 surveille en permanence vos infrastructures pour détecter les menaces en temps réel. Nous utilisons l'IA pour identifier les comportements suspects, alerter immédiatement en cas d'incident, et déclencher des réponses automatisées pour minimiser les dommages.".to_string(),
					slug: slugify("Surveillance & Détection"),
					icon: IconId::Eye,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("Monitoring Center")],
					advantages: strings(&[
						"Surveillance 24/7 sans interruption",
						"Détection proactive des menaces",
						"Réponse automatisée aux incidents",
						"Réduction du temps de réaction",
					]),
					target_clients: strings(&[
						"Centres de données",
						"Entreprises critiques",
						"Institutions financières",
						"Organisations gouvernementales",
					]),
					features: strings(&[
						"Monitoring en temps réel",
						"Détection d'anomalies par IA",
						"Alertes intelligentes",
						"Tableaux de bord personnalisables",
					]),
					use_cases: strings(&[
						"Surveillance d'infrastructure",
						"Détection d'intrusions",
						"Monitoring de performances",
						"Gestion d'incidents de sécurité",
					]),
				},
				Solution {
					title: "Gestion des Identités".to_string(),
					description: "Solutions IAM complètes avec authentification multi-facteurs et gestion des accès.".to_string(),
					full_description: "Nos solutions IAM (Identity and Access Management) offrent une gestion centralisée des identités et des accès. Nous implémentons l'authentification multi-facteurs, la gestion des rôles et permissions, et des politiques de sécurité avancées pour protéger vos ressources.".to_string(),
					slug: slugify("Gestion des Identités"),
					icon: IconId::LockClosed,
					image: LOGO_URL.to_string(),
					media: vec![logo_media("IAM Dashboard")],
					advantages: strings(&[
						"Gestion centralisée des identités",
						"Sécurité renforcée avec MFA",
						"Conformité réglementaire",
						"Expérience utilisateur simplifiée",
					]),
					target_clients: strings(&[
						"Grandes entreprises",
						"Institutions financières",
						"Organisations gouvernementales",
						"Fournisseurs de services cloud",
					]),
					features: strings(&[
						"Authentification multi-facteurs (MFA)",
						"Gestion des rôles et permissions (RBAC)",
						"Single Sign-On (SSO)",
						"Audit et conformité",
					]),
					use_cases: strings(&[
						"Gestion d'accès entreprise",
						"Sécurisation d'applications cloud",
						"Conformité RGPD et standards",
						"Onboarding/offboarding automatisé",
					]),
				},
			],
		},
	]
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn test_catalog_shape() {
		let all = sectors();
		assert_eq!(all.len(), 5);

		let solution_counts: Vec<usize> = all.iter().map(|s| s.solutions.len()).collect();
		assert_eq!(solution_counts, vec![3, 2, 3, 2, 3]);
	}

	#[test]
	fn test_sector_slugs() {
		let slugs: Vec<&str> = sectors().iter().map(|s| s.slug.as_str()).collect();
		assert_eq!(
			slugs,
			vec![
				"intelligence-artificielle",
				"telecommunications",
				"applications-web-mobile",
				"lms-e-learning",
				"cybersecurite",
			]
		);
	}

	#[test]
	fn test_find_sector_by_slug() {
		let sector = find_sector_by_slug("telecommunications").unwrap();
		assert_eq!(sector.title, "Télécommunications");
		assert_eq!(sector.badge, "Telecom & Réseaux");

		assert!(find_sector_by_slug("finance").is_none());
		assert!(find_sector_by_slug("").is_none());
		// Slugs are exact: raw titles do not match.
		assert!(find_sector_by_slug("Télécommunications").is_none());
	}

	#[test]
	fn test_find_solution_by_slug() {
		let solution =
			find_solution_by_slug("intelligence-artificielle", "computer-vision").unwrap();
		assert_eq!(solution.title, "Computer Vision");

		let solution = find_solution_by_slug("cybersecurite", "gestion-des-identites").unwrap();
		assert_eq!(solution.title, "Gestion des Identités");
	}

	#[test]
	fn test_find_solution_requires_owning_sector() {
		// "computer-vision" exists, but under intelligence-artificielle.
		assert!(find_solution_by_slug("cybersecurite", "computer-vision").is_none());
		assert!(find_solution_by_slug("unknown-sector", "computer-vision").is_none());
		assert!(find_solution_by_slug("cybersecurite", "unknown-solution").is_none());
	}

	#[test]
	fn test_slugs_derive_from_titles() {
		for sector in sectors() {
			assert_eq!(sector.slug, slugify(&sector.title));
			for solution in &sector.solutions {
				assert_eq!(solution.slug, slugify(&solution.title));
			}
		}
	}

	#[test]
	fn test_slugs_are_unique() {
		let sector_slugs: HashSet<&str> = sectors().iter().map(|s| s.slug.as_str()).collect();
		assert_eq!(sector_slugs.len(), sectors().len());

		for sector in sectors() {
			let solution_slugs: HashSet<&str> =
				sector.solutions.iter().map(|s| s.slug.as_str()).collect();
			assert_eq!(solution_slugs.len(), sector.solutions.len());
		}
	}

	#[test]
	fn test_every_entry_is_fully_populated() {
		for sector in sectors() {
			assert!(!sector.description.is_empty());
			assert!(!sector.full_description.is_empty());
			assert!(!sector.badge.is_empty());

			for solution in &sector.solutions {
				assert!(!solution.description.is_empty());
				assert!(!solution.full_description.is_empty());
				assert!(!solution.media.is_empty(), "{} has no media", solution.title);
				assert!(!solution.advantages.is_empty());
				assert!(!solution.target_clients.is_empty());
				assert!(!solution.features.is_empty());
				assert!(!solution.use_cases.is_empty());
			}
		}
	}

	#[test]
	fn test_rosters() {
		assert_eq!(PARTNERS, &["Ericsson", "Huawei"]);
		assert_eq!(TECHNOLOGIES.len(), 30);
		assert_eq!(TECHNOLOGIES[0], "TensorFlow");
		assert_eq!(TECHNOLOGIES[29], "MongoDB");
	}
}
