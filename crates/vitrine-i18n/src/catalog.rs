// Copyright (c) 2025 AIUNIVERS <contact@aiunivers.ai>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation tables and lookup functions.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::locale::DEFAULT_LOCALE;

const EN: &[(&str, &str)] = &[
	// Navigation
	("nav.home", "Home"),
	("nav.about", "About"),
	("nav.services", "Services"),
	("nav.solutions", "Solutions"),
	("nav.sectors", "Sectors"),
	("nav.contact", "Contact"),
	// Homepage
	("home.subtitle", "The future of artificial intelligence starts here"),
	("home.discover", "Discover"),
	("home.scroll", "Scroll"),
	("home.expertise", "Our Expertise"),
	("home.sectors", "Sectors of Activity"),
	(
		"home.sectors.description",
		"Cutting-edge technological solutions to transform your business and accelerate your growth",
	),
	("home.partners", "Our Partners"),
	(
		"home.partners.description",
		"We collaborate with global technology leaders to deliver excellence solutions",
	),
	// Footer
	(
		"footer.description",
		"The future of artificial intelligence starts here. Transform your business with our innovative solutions.",
	),
	("footer.navigation", "Navigation"),
	("footer.solutions", "Solutions"),
	("footer.contact", "Contact"),
	("footer.rights", "All rights reserved."),
	("footer.legal", "Legal Notice"),
	("footer.privacy", "Privacy Policy"),
	// Contact
	("contact.badge", "Contact Us"),
	("contact.title", "Ready to transform your business?"),
	(
		"contact.description",
		"Let's discuss your projects and discover how AI can accelerate your growth.",
	),
	("contact.connected", "Stay Connected"),
	("contact.social", "Follow us on our social networks for the latest news."),
	("contact.linkedin", "Follow us on LinkedIn"),
	("contact.email", "Email"),
	("contact.location", "Location"),
	("contact.location.value", "Algiers, Algeria"),
	("contact.form.title", "Send us a message"),
	(
		"contact.form.description",
		"Fill out the form below and we will respond as soon as possible.",
	),
	("contact.form.name", "Full Name *"),
	("contact.form.name.placeholder", "John Doe"),
	("contact.form.email", "Email *"),
	("contact.form.email.placeholder", "john.doe@example.com"),
	("contact.form.company", "Company"),
	("contact.form.company.placeholder", "Your company name (optional)"),
	("contact.form.subject", "Subject *"),
	("contact.form.subject.placeholder", "Subject of your message"),
	("contact.form.message", "Message *"),
	(
		"contact.form.message.placeholder",
		"Describe your project, your needs or ask your questions...",
	),
	(
		"contact.form.message.description",
		"Describe your project, your needs or ask your questions. We will respond quickly.",
	),
	("contact.form.char_count", "{count}/{max} characters"),
	("contact.form.reset", "Reset"),
	("contact.form.submit", "Send Message"),
	("contact.form.success", "Message sent successfully!"),
	("contact.form.success.description", "We will respond as soon as possible."),
	("contact.error.too_short", "Must contain at least {min} characters."),
	("contact.error.too_long", "Must contain at most {max} characters."),
	("contact.error.email", "Please enter a valid email address."),
	// Sectors
	("sectors.back", "← Back to sectors"),
	("sectors.solutions", "Our Solutions"),
	// Solutions
	("solutions.advantages", "Key Advantages"),
	("solutions.advantages.description", "The main benefits of this solution"),
	("solutions.clients", "Target Clients"),
	("solutions.clients.description", "The sectors and companies targeted by this solution"),
	("solutions.features", "Main Features"),
	("solutions.features.description", "The key capabilities of this solution"),
	("solutions.usecases", "Use Cases"),
	("solutions.usecases.description", "Concrete examples of application of this solution"),
	("solutions.demos", "Demonstrations"),
	("solutions.cta.title", "Interested in this solution?"),
	("solutions.cta.description", "Contact us to discuss your specific needs"),
	("solutions.cta.button", "Request a Quote"),
	("solutions.back", "← Back to sector"),
	// Status bar
	("status.quit", "Quit"),
	("status.back", "Back"),
	("status.select", "Select"),
	("status.move", "Navigate"),
	("status.theme", "Theme"),
	("status.language", "Language"),
	("status.sectors", "Sectors"),
	("status.submit", "Send"),
	("status.skip", "Skip"),
];

const FR: &[(&str, &str)] = &[
	// Navigation
	("nav.home", "Accueil"),
	("nav.about", "À propos"),
	("nav.services", "Services"),
	("nav.solutions", "Solutions"),
	("nav.sectors", "Secteurs"),
	("nav.contact", "Contact"),
	// Homepage
	("home.subtitle", "L'avenir de l'intelligence artificielle commence ici"),
	("home.discover", "Découvrir"),
	("home.scroll", "Scroll"),
	("home.expertise", "Nos Expertises"),
	("home.sectors", "Secteurs d'Activités"),
	(
		"home.sectors.description",
		"Des solutions technologiques de pointe pour transformer votre entreprise et accélérer votre croissance",
	),
	("home.partners", "Nos Partenaires"),
	(
		"home.partners.description",
		"Nous collaborons avec les leaders mondiaux de la technologie pour offrir des solutions d'excellence",
	),
	// Footer
	(
		"footer.description",
		"L'avenir de l'intelligence artificielle commence ici. Transformez votre entreprise avec nos solutions innovantes.",
	),
	("footer.navigation", "Navigation"),
	("footer.solutions", "Solutions"),
	("footer.contact", "Contact"),
	("footer.rights", "Tous droits réservés."),
	("footer.legal", "Mentions légales"),
	("footer.privacy", "Politique de confidentialité"),
	// Contact
	("contact.badge", "Contactez-nous"),
	("contact.title", "Prêt à transformer votre entreprise ?"),
	(
		"contact.description",
		"Discutons de vos projets et découvrons comment l'IA peut accélérer votre croissance.",
	),
	("contact.connected", "Restons connectés"),
	("contact.social", "Suivez-nous sur nos réseaux sociaux pour les dernières actualités."),
	("contact.linkedin", "Suivez-nous sur LinkedIn"),
	("contact.email", "Email"),
	("contact.location", "Localisation"),
	("contact.location.value", "Alger, Algérie"),
	("contact.form.title", "Envoyez-nous un message"),
	(
		"contact.form.description",
		"Remplissez le formulaire ci-dessous et nous vous répondrons dans les plus brefs délais.",
	),
	("contact.form.name", "Nom complet *"),
	("contact.form.name.placeholder", "Jean Dupont"),
	("contact.form.email", "Email *"),
	("contact.form.email.placeholder", "jean.dupont@example.com"),
	("contact.form.company", "Entreprise"),
	("contact.form.company.placeholder", "Nom de votre entreprise (optionnel)"),
	("contact.form.subject", "Sujet *"),
	("contact.form.subject.placeholder", "Sujet de votre message"),
	("contact.form.message", "Message *"),
	("contact.form.message.placeholder", "Décrivez votre projet ou votre demande..."),
	(
		"contact.form.message.description",
		"Décrivez votre projet, vos besoins ou posez vos questions. Nous vous répondrons rapidement.",
	),
	("contact.form.char_count", "{count}/{max} caractères"),
	("contact.form.reset", "Réinitialiser"),
	("contact.form.submit", "Envoyer le message"),
	("contact.form.success", "Message envoyé avec succès !"),
	("contact.form.success.description", "Nous vous répondrons dans les plus brefs délais."),
	("contact.error.too_short", "Doit contenir au moins {min} caractères."),
	("contact.error.too_long", "Doit contenir au plus {max} caractères."),
	("contact.error.email", "Veuillez entrer une adresse email valide."),
	// Sectors
	("sectors.back", "← Retour aux secteurs"),
	("sectors.solutions", "Nos Solutions"),
	// Solutions
	("solutions.advantages", "Avantages Clés"),
	("solutions.advantages.description", "Les bénéfices principaux de cette solution"),
	("solutions.clients", "Clients Visés"),
	("solutions.clients.description", "Les secteurs et entreprises ciblés par cette solution"),
	("solutions.features", "Fonctionnalités Principales"),
	("solutions.features.description", "Les capacités clés de cette solution"),
	("solutions.usecases", "Cas d'Usage"),
	("solutions.usecases.description", "Exemples concrets d'application de cette solution"),
	("solutions.demos", "Démonstrations"),
	("solutions.cta.title", "Intéressé par cette solution ?"),
	("solutions.cta.description", "Contactez-nous pour discuter de vos besoins spécifiques"),
	("solutions.cta.button", "Demander un devis"),
	("solutions.back", "← Retour au secteur"),
	// Status bar
	("status.quit", "Quitter"),
	("status.back", "Retour"),
	("status.select", "Choisir"),
	("status.move", "Naviguer"),
	("status.theme", "Thème"),
	("status.language", "Langue"),
	("status.sectors", "Secteurs"),
	("status.submit", "Envoyer"),
	("status.skip", "Passer"),
];

const AR: &[(&str, &str)] = &[
	// Navigation
	("nav.home", "الرئيسية"),
	("nav.about", "من نحن"),
	("nav.services", "الخدمات"),
	("nav.solutions", "الحلول"),
	("nav.sectors", "القطاعات"),
	("nav.contact", "اتصل بنا"),
	// Homepage
	("home.subtitle", "مستقبل الذكاء الاصطناعي يبدأ هنا"),
	("home.discover", "اكتشف"),
	("home.scroll", "انتقل"),
	("home.expertise", "خبراتنا"),
	("home.sectors", "مجالات النشاط"),
	("home.sectors.description", "حلول تكنولوجية متطورة لتحويل عملك وتسريع نموك"),
	("home.partners", "شركاؤنا"),
	("home.partners.description", "نتعاون مع قادة التكنولوجيا العالميين لتقديم حلول متميزة"),
	// Footer
	("footer.description", "مستقبل الذكاء الاصطناعي يبدأ هنا. حول عملك مع حلولنا المبتكرة."),
	("footer.navigation", "التنقل"),
	("footer.solutions", "الحلول"),
	("footer.contact", "اتصل بنا"),
	("footer.rights", "جميع الحقوق محفوظة."),
	("footer.legal", "إشعار قانوني"),
	("footer.privacy", "سياسة الخصوصية"),
	// Contact
	("contact.badge", "اتصل بنا"),
	("contact.title", "هل أنت مستعد لتحويل عملك؟"),
	("contact.description", "دعنا نناقش مشاريعك ونكتشف كيف يمكن للذكاء الاصطناعي تسريع نموك."),
	("contact.connected", "ابق على اتصال"),
	("contact.social", "تابعنا على شبكاتنا الاجتماعية للحصول على آخر الأخبار."),
	("contact.linkedin", "تابعنا على LinkedIn"),
	("contact.email", "البريد الإلكتروني"),
	("contact.location", "الموقع"),
	("contact.location.value", "الجزائر، الجزائر"),
	("contact.form.title", "أرسل لنا رسالة"),
	("contact.form.description", "املأ النموذج أدناه وسنرد في أقرب وقت ممكن."),
	("contact.form.name", "الاسم الكامل *"),
	("contact.form.name.placeholder", "محمد أحمد"),
	("contact.form.email", "البريد الإلكتروني *"),
	("contact.form.email.placeholder", "mohamed.ahmed@example.com"),
	("contact.form.company", "الشركة"),
	("contact.form.company.placeholder", "اسم شركتك (اختياري)"),
	("contact.form.subject", "الموضوع *"),
	("contact.form.subject.placeholder", "موضوع رسالتك"),
	("contact.form.message", "الرسالة *"),
	("contact.form.message.placeholder", "اوصف مشروعك أو احتياجاتك أو اطرح أسئلتك..."),
	("contact.form.message.description", "اوصف مشروعك أو احتياجاتك أو اطرح أسئلتك. سنرد بسرعة."),
	("contact.form.char_count", "{count}/{max} أحرف"),
	("contact.form.reset", "إعادة تعيين"),
	("contact.form.submit", "إرسال الرسالة"),
	("contact.form.success", "تم إرسال الرسالة بنجاح!"),
	("contact.form.success.description", "سنرد في أقرب وقت ممكن."),
	("contact.error.too_short", "يجب أن يحتوي على {min} أحرف على الأقل."),
	("contact.error.too_long", "يجب ألا يتجاوز {max} حرفًا."),
	("contact.error.email", "يرجى إدخال عنوان بريد إلكتروني صالح."),
	// Sectors
	("sectors.back", "← العودة إلى القطاعات"),
	("sectors.solutions", "حلولنا"),
	// Solutions
	("solutions.advantages", "المزايا الرئيسية"),
	("solutions.advantages.description", "الفوائد الرئيسية لهذا الحل"),
	("solutions.clients", "العملاء المستهدفون"),
	("solutions.clients.description", "القطاعات والشركات المستهدفة بهذا الحل"),
	("solutions.features", "الميزات الرئيسية"),
	("solutions.features.description", "القدرات الرئيسية لهذا الحل"),
	("solutions.usecases", "حالات الاستخدام"),
	("solutions.usecases.description", "أمثلة عملية لتطبيق هذا الحل"),
	("solutions.demos", "العروض التوضيحية"),
	("solutions.cta.title", "مهتم بهذا الحل؟"),
	("solutions.cta.description", "اتصل بنا لمناقشة احتياجاتك الخاصة"),
	("solutions.cta.button", "طلب عرض أسعار"),
	("solutions.back", "← العودة إلى القطاع"),
	// Status bar
	("status.quit", "خروج"),
	("status.back", "رجوع"),
	("status.select", "اختيار"),
	("status.move", "تنقل"),
	("status.theme", "المظهر"),
	("status.language", "اللغة"),
	("status.sectors", "القطاعات"),
	("status.submit", "إرسال"),
	("status.skip", "تخطي"),
];

const ES: &[(&str, &str)] = &[
	// Navigation
	("nav.home", "Inicio"),
	("nav.about", "Acerca de"),
	("nav.services", "Servicios"),
	("nav.solutions", "Soluciones"),
	("nav.sectors", "Sectores"),
	("nav.contact", "Contacto"),
	// Homepage
	("home.subtitle", "El futuro de la inteligencia artificial comienza aquí"),
	("home.discover", "Descubrir"),
	("home.scroll", "Desplazar"),
	("home.expertise", "Nuestras Experiencias"),
	("home.sectors", "Sectores de Actividad"),
	(
		"home.sectors.description",
		"Soluciones tecnológicas de vanguardia para transformar su empresa y acelerar su crecimiento",
	),
	("home.partners", "Nuestros Socios"),
	(
		"home.partners.description",
		"Colaboramos con líderes tecnológicos globales para ofrecer soluciones de excelencia",
	),
	// Footer
	(
		"footer.description",
		"El futuro de la inteligencia artificial comienza aquí. Transforme su empresa con nuestras soluciones innovadoras.",
	),
	("footer.navigation", "Navegación"),
	("footer.solutions", "Soluciones"),
	("footer.contact", "Contacto"),
	("footer.rights", "Todos los derechos reservados."),
	("footer.legal", "Aviso Legal"),
	("footer.privacy", "Política de Privacidad"),
	// Contact
	("contact.badge", "Contáctenos"),
	("contact.title", "¿Listo para transformar su empresa?"),
	(
		"contact.description",
		"Hablemos de sus proyectos y descubramos cómo la IA puede acelerar su crecimiento.",
	),
	("contact.connected", "Mantengámonos Conectados"),
	("contact.social", "Síganos en nuestras redes sociales para las últimas noticias."),
	("contact.linkedin", "Síganos en LinkedIn"),
	("contact.email", "Correo Electrónico"),
	("contact.location", "Ubicación"),
	("contact.location.value", "Argel, Argelia"),
	("contact.form.title", "Envíenos un mensaje"),
	(
		"contact.form.description",
		"Complete el formulario a continuación y le responderemos lo antes posible.",
	),
	("contact.form.name", "Nombre Completo *"),
	("contact.form.name.placeholder", "Juan Pérez"),
	("contact.form.email", "Correo Electrónico *"),
	("contact.form.email.placeholder", "juan.perez@example.com"),
	("contact.form.company", "Empresa"),
	("contact.form.company.placeholder", "Nombre de su empresa (opcional)"),
	("contact.form.subject", "Asunto *"),
	("contact.form.subject.placeholder", "Asunto de su mensaje"),
	("contact.form.message", "Mensaje *"),
	("contact.form.message.placeholder", "Describa su proyecto o su solicitud..."),
	(
		"contact.form.message.description",
		"Describa su proyecto, sus necesidades o haga sus preguntas. Responderemos rápidamente.",
	),
	("contact.form.char_count", "{count}/{max} caracteres"),
	("contact.form.reset", "Restablecer"),
	("contact.form.submit", "Enviar Mensaje"),
	("contact.form.success", "¡Mensaje enviado con éxito!"),
	("contact.form.success.description", "Le responderemos lo antes posible."),
	("contact.error.too_short", "Debe contener al menos {min} caracteres."),
	("contact.error.too_long", "Debe contener como máximo {max} caracteres."),
	("contact.error.email", "Por favor, introduzca una dirección de correo electrónico válida."),
	// Sectors
	("sectors.back", "← Volver a sectores"),
	("sectors.solutions", "Nuestras Soluciones"),
	// Solutions
	("solutions.advantages", "Ventajas Clave"),
	("solutions.advantages.description", "Los principales beneficios de esta solución"),
	("solutions.clients", "Clientes Objetivo"),
	("solutions.clients.description", "Los sectores y empresas objetivo de esta solución"),
	("solutions.features", "Características Principales"),
	("solutions.features.description", "Las capacidades clave de esta solución"),
	("solutions.usecases", "Casos de Uso"),
	("solutions.usecases.description", "Ejemplos concretos de aplicación de esta solución"),
	("solutions.demos", "Demostraciones"),
	("solutions.cta.title", "¿Interesado en esta solución?"),
	("solutions.cta.description", "Contáctenos para discutir sus necesidades específicas"),
	("solutions.cta.button", "Solicitar Cotización"),
	("solutions.back", "← Volver al sector"),
	// Status bar
	("status.quit", "Salir"),
	("status.back", "Volver"),
	("status.select", "Seleccionar"),
	("status.move", "Navegar"),
	("status.theme", "Tema"),
	("status.language", "Idioma"),
	("status.sectors", "Sectores"),
	("status.submit", "Enviar"),
	("status.skip", "Omitir"),
];

const DE: &[(&str, &str)] = &[
	// Navigation
	("nav.home", "Startseite"),
	("nav.about", "Über uns"),
	("nav.services", "Dienstleistungen"),
	("nav.solutions", "Lösungen"),
	("nav.sectors", "Sektoren"),
	("nav.contact", "Kontakt"),
	// Homepage
	("home.subtitle", "Die Zukunft der künstlichen Intelligenz beginnt hier"),
	("home.discover", "Entdecken"),
	("home.scroll", "Scrollen"),
	("home.expertise", "Unsere Expertise"),
	("home.sectors", "Tätigkeitsbereiche"),
	(
		"home.sectors.description",
		"Hochmoderne technologische Lösungen zur Transformation Ihres Unternehmens und Beschleunigung Ihres Wachstums",
	),
	("home.partners", "Unsere Partner"),
	(
		"home.partners.description",
		"Wir arbeiten mit globalen Technologieführern zusammen, um exzellente Lösungen anzubieten",
	),
	// Footer
	(
		"footer.description",
		"Die Zukunft der künstlichen Intelligenz beginnt hier. Transformieren Sie Ihr Unternehmen mit unseren innovativen Lösungen.",
	),
	("footer.navigation", "Navigation"),
	("footer.solutions", "Lösungen"),
	("footer.contact", "Kontakt"),
	("footer.rights", "Alle Rechte vorbehalten."),
	("footer.legal", "Rechtliche Hinweise"),
	("footer.privacy", "Datenschutzrichtlinie"),
	// Contact
	("contact.badge", "Kontaktieren Sie uns"),
	("contact.title", "Bereit, Ihr Unternehmen zu transformieren?"),
	(
		"contact.description",
		"Lassen Sie uns über Ihre Projekte sprechen und entdecken, wie KI Ihr Wachstum beschleunigen kann.",
	),
	("contact.connected", "Bleiben wir in Verbindung"),
	(
		"contact.social",
		"Folgen Sie uns in unseren sozialen Netzwerken für die neuesten Nachrichten.",
	),
	("contact.linkedin", "Folgen Sie uns auf LinkedIn"),
	("contact.email", "E-Mail"),
	("contact.location", "Standort"),
	("contact.location.value", "Algier, Algerien"),
	("contact.form.title", "Senden Sie uns eine Nachricht"),
	(
		"contact.form.description",
		"Füllen Sie das untenstehende Formular aus und wir werden Ihnen so schnell wie möglich antworten.",
	),
	("contact.form.name", "Vollständiger Name *"),
	("contact.form.name.placeholder", "Max Mustermann"),
	("contact.form.email", "E-Mail *"),
	("contact.form.email.placeholder", "max.mustermann@example.com"),
	("contact.form.company", "Unternehmen"),
	("contact.form.company.placeholder", "Name Ihres Unternehmens (optional)"),
	("contact.form.subject", "Betreff *"),
	("contact.form.subject.placeholder", "Betreff Ihrer Nachricht"),
	("contact.form.message", "Nachricht *"),
	("contact.form.message.placeholder", "Beschreiben Sie Ihr Projekt oder Ihre Anfrage..."),
	(
		"contact.form.message.description",
		"Beschreiben Sie Ihr Projekt, Ihre Bedürfnisse oder stellen Sie Ihre Fragen. Wir werden schnell antworten.",
	),
	("contact.form.char_count", "{count}/{max} Zeichen"),
	("contact.form.reset", "Zurücksetzen"),
	("contact.form.submit", "Nachricht Senden"),
	("contact.form.success", "Nachricht erfolgreich gesendet!"),
	(
		"contact.form.success.description",
		"Wir werden Ihnen so schnell wie möglich antworten.",
	),
	("contact.error.too_short", "Muss mindestens {min} Zeichen enthalten."),
	("contact.error.too_long", "Darf höchstens {max} Zeichen enthalten."),
	("contact.error.email", "Bitte geben Sie eine gültige E-Mail-Adresse ein."),
	// Sectors
	("sectors.back", "← Zurück zu Sektoren"),
	("sectors.solutions", "Unsere Lösungen"),
	// Solutions
	("solutions.advantages", "Hauptvorteile"),
	("solutions.advantages.description", "Die Hauptvorteile dieser Lösung"),
	("solutions.clients", "Zielkunden"),
	(
		"solutions.clients.description",
		"Die von dieser Lösung angesprochenen Sektoren und Unternehmen",
	),
	("solutions.features", "Hauptfunktionen"),
	("solutions.features.description", "Die wichtigsten Fähigkeiten dieser Lösung"),
	("solutions.usecases", "Anwendungsfälle"),
	("solutions.usecases.description", "Konkrete Anwendungsbeispiele dieser Lösung"),
	("solutions.demos", "Demonstrationen"),
	("solutions.cta.title", "Interessiert an dieser Lösung?"),
	(
		"solutions.cta.description",
		"Kontaktieren Sie uns, um Ihre spezifischen Bedürfnisse zu besprechen",
	),
	("solutions.cta.button", "Angebot Anfordern"),
	("solutions.back", "← Zurück zum Sektor"),
	// Status bar
	("status.quit", "Beenden"),
	("status.back", "Zurück"),
	("status.select", "Auswählen"),
	("status.move", "Navigieren"),
	("status.theme", "Design"),
	("status.language", "Sprache"),
	("status.sectors", "Sektoren"),
	("status.submit", "Senden"),
	("status.skip", "Überspringen"),
];

static CATALOGS: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
	Lazy::new(|| {
		let mut map = HashMap::new();
		map.insert("en", EN.iter().copied().collect());
		map.insert("fr", FR.iter().copied().collect());
		map.insert("ar", AR.iter().copied().collect());
		map.insert("es", ES.iter().copied().collect());
		map.insert("de", DE.iter().copied().collect());
		map
	});

/// Translate a string key for the given locale.
///
/// Lookup order:
/// 1. The requested locale's table
/// 2. The English table
/// 3. The key itself, returned verbatim
///
/// # Arguments
///
/// * `locale` - The locale code (e.g., "en", "fr", "ar")
/// * `key` - The message key to translate
///
/// # Example
///
/// ```
/// use vitrine_i18n::t;
///
/// let title = t("fr", "contact.form.title");
/// assert_eq!(title, "Envoyez-nous un message");
/// ```
pub fn t(locale: &str, key: &str) -> String {
	if let Some(table) = CATALOGS.get(locale) {
		if let Some(value) = table.get(key) {
			return (*value).to_string();
		}
	}

	if locale != DEFAULT_LOCALE {
		if let Some(table) = CATALOGS.get(DEFAULT_LOCALE) {
			if let Some(value) = table.get(key) {
				return (*value).to_string();
			}
		}
	}

	tracing::debug!(key, "translation key missing from every table");
	key.to_string()
}

/// Translate a string with variable substitution.
///
/// Variables use `{name}` syntax in the translated string.
///
/// # Arguments
///
/// * `locale` - The locale code (e.g., "en", "fr", "ar")
/// * `key` - The message key to translate
/// * `args` - Variable substitutions as (name, value) pairs
///
/// # Example
///
/// ```
/// use vitrine_i18n::t_fmt;
///
/// let counter = t_fmt("en", "contact.form.char_count", &[
///     ("count", "42"),
///     ("max", "1000"),
/// ]);
/// assert_eq!(counter, "42/1000 characters");
/// ```
pub fn t_fmt(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
	let mut result = t(locale, key);

	for (name, value) in args {
		let placeholder = format!("{{{name}}}");
		result = result.replace(&placeholder, value);
	}

	result
}
