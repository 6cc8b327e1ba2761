//! # Built-in Category Catalog
//!
//! File: cli/src/classifier/catalog.rs
//!
//! ## Overview
//!
//! The Senac Serra question catalog served by default. Order matters: when two
//! categories score the same, the one listed first wins. `padrao` is the fallback.
//!
//! Patterns are matched against normalized (lowercase, accent-free) text, so
//! accented alternatives such as `ol[aá]` never match on their accented branch;
//! they are kept as written because their letters still feed the trigger-word score.
//!
use super::table::{CategoryDef, CategoryTable};
use crate::core::error::AssistantError;

/// Key of the built-in fallback category.
pub const FALLBACK_KEY: &str = "padrao";

struct Entry {
    key: &'static str,
    patterns: &'static [&'static str],
    responses: &'static [&'static str],
}

const CATALOG: &[Entry] = &[
    Entry {
        key: "saudacao",
        patterns: &[
            r"\b(oi|ol[aá]|e[ií]|e a[ií]|bom dia|boa tarde|boa noite)\b",
        ],
        responses: &[
            "Olá! Sou a assistente do Senac Serra. Como posso te ajudar hoje?",
            "Oi! Bem-vindo(a) ao Senac Serra. O que você gostaria de saber?",
            "Olá! Posso tirar dúvidas sobre cursos, inscrições, valores e muito mais.",
        ],
    },
    Entry {
        key: "despedida",
        patterns: &[
            r"\b(tchau|ate logo|ate mais|obrigado,? por enquanto|valeu,? ate|ate breve)\b",
        ],
        responses: &[
            "Até mais! Se precisar, é só chamar.",
            "Tchau! Estarei por aqui quando precisar.",
            "Até logo! Conte com o Senac Serra.",
        ],
    },
    Entry {
        key: "o_que_e_senac",
        patterns: &[
            r"\b(o que (e|é) (o )?senac|sobre o senac|quem (sao|são) voces|quem (e|é) voces)\b",
        ],
        responses: &[
            "O Senac é uma instituição de educação profissional. No Senac Serra oferecemos cursos livres, técnicos e programas de qualificação em diversas áreas para você se preparar para o mercado de trabalho.",
        ],
    },
    Entry {
        key: "localizacao",
        patterns: &[
            r"\b(on(de|de fica)|endereco|endereço|localiza(ca|ç)ao|mapa)\b",
        ],
        responses: &[
            "Estamos no Senac Serra (ES). Endereço: Av. Talma Rodrigues Ribeiro, 2881 - Portal de Jacaraípe, Serra - ES, 29173-795. Se precisar, te envio instruções de como chegar de ônibus.",
        ],
    },
    Entry {
        key: "telefone_contato",
        patterns: &[
            r"\b(telefone|contato|falar com atendente|numero|n[uú]mero|whats|whatsapp)\b",
        ],
        responses: &[
            "Você pode entrar em contato com nossa equipe pelo telefone/WhatsApp da unidade por esse número: Telefone: (27) 3243-8153.",
        ],
    },
    Entry {
        key: "horario_funcionamento",
        patterns: &[
            r"\b(hor[aá]rio(s)?|funciona que horas|abre que horas|fecha que horas|qual (o )?horario)\b",
        ],
        responses: &[
            "O Senac Serra funciona dás 8:00 até as 22:00, mas os horários de atendimento podem variar conforme o período de matrículas e agenda de cursos. Recomendo confirmar no telefone/WhatsApp da unidade para o dia que você pretende ir.",
        ],
    },
    Entry {
        key: "cursos_disponiveis",
        patterns: &[
            r"\b(curso(s)? dispon[ií]vel(is)?|quais cursos tem?|lista de cursos|oferta de cursos|quais são os cursos que oeferece?)\b",
        ],
        responses: &[
            "Oferecemos cursos em áreas como Administração, Tecnologia, Gastronomia, Beleza, Saúde e mais. Se me disser a área de interesse, eu te direciono melhor.",
        ],
    },
    Entry {
        key: "inscricoes_matricula",
        patterns: &[
            r"\b(inscri(c|ç)[aã]o|matr[ií]cula|como me inscrevo|quero me matricular)\b",
        ],
        responses: &[
            "Para se inscrever, você pode ir à unidade com documento oficial e, quando necessário, comprovante de escolaridade. Em alguns cursos é possível realizar a inscrição on-line.",
        ],
    },
    Entry {
        key: "valores_pagamento",
        patterns: &[
            r"\b(valor(es)?|pre(c|ç)o(s)?|mensalidade(s)?|quanto custa|formas de pagamento|paga como|parcelamento)\b",
        ],
        responses: &[
            "Os valores variam conforme o curso e a carga horária. O pagamento geralmente pode ser à vista ou parcelado. Se quiser, você pode saber mais entrando no site oficial do Senac Serra (ES).",
        ],
    },
    Entry {
        key: "gratuidade_psg",
        patterns: &[
            r"\b(gratuidade|psg|bolsa|curso gratuito|bolsas)\b",
        ],
        responses: &[
            "O Senac possui o Programa Senac de Gratuidade (PSG), com vagas em cursos gratuitos para quem atende aos critérios do programa. As vagas são limitadas e divulgadas periodicamente.",
        ],
    },
    Entry {
        key: "modalidades_ead_presencial",
        patterns: &[
            r"\b(ead|a distancia|on-line|online|presencial|h[ií]brido|hibrido|modalidade)\b",
        ],
        responses: &[
            "O Senac Serra oferece cursos nas duas modalidades: presencial (nas instalações da unidade) e EAD (a distância, por meio do Senac EAD Nacional, com o polo da Serra como apoio).",
        ],
    },
    Entry {
        key: "tecnologia",
        patterns: &[
            r"\b(Tecnologia|tecnologia|informatica|informática|sistemas|computacao|computação|computador|computadores|internet|inteligencia artificial)\b",
        ],
        responses: &[
            "Existem diversos cursos disponíveis na unidade Serra na área de tecnologia: Técnico em informática, Técnico em desenvolvimento de sistemas, Informática básica, Excel básico, Excel avançado, Power Bi, MS Project, Canva para educação e para empresas, Jovem programadora e entre outros.",
        ],
    },
    Entry {
        key: "professores",
        patterns: &[
            r"\b(professores|como sao os professores?|tem bons professores?|tem professores capacitados?)\b",
        ],
        responses: &[
            "Os professores do Senac Serra têm experiência prática no mercado, atuam como mediadores da aprendizagem, utilizam metodologias ativas, estimulam o ciclo ação-reflexão-ação, acompanham de perto o desenvolvimento dos estudantes e passam por formação continuada para se manterem atualizados e alinhados ao Modelo Pedagógico do Senac.",
        ],
    },
    Entry {
        key: "infraestrutura",
        patterns: &[
            r"\b(estrutura|infraestrutura|laborat[oó]rio(s)?|cozinha pedag[oó]gica|salas|equipamentos|biblioteca|banheiros)\b",
        ],
        responses: &[
            "De forma geral, a infraestrutura conta com: Salas de aula modernas com recursos multimídia e ambiente confortável. Laboratórios de informática equipados com tecnologia atualizada para atividades digitais. Cozinha pedagógica para cursos da área de gastronomia, com equipamentos profissionais. Salão de beleza e estética para práticas em beleza, cabelo, maquiagem e estética. Laboratórios de saúde ambientes que simulam clínicas e consultórios para cursos técnicos em saúde. Biblioteca com acervo físico e digital de apoio ao estudo. Ambientes de atendimento ao público em alguns cursos, os alunos vivenciam situações reais de trabalho com clientes. Espaços multiuso que podem ser adaptados para diferentes situações de aprendizagem e projetos integradores. Essa estrutura é pensada para que os alunos aprendam fazendo, com metodologias ativas, vivências reais e contato direto com situações práticas.",
        ],
    },
    Entry {
        key: "estagio_empregabilidade",
        patterns: &[
            r"\b(est[aá]gio|emprego|empregabilidade|parceria com empresas|oportunidade(s) de trabalho)\b",
        ],
        responses: &[
            "O Senac mantém relacionamento com empresas parceiras e divulga oportunidades para alunos conforme as áreas. Alguns cursos incluem atividades práticas e encaminhamentos.",
        ],
    },
    Entry {
        key: "documentos_requisitos",
        patterns: &[
            r"\b(documento(s)?|requisito(s)?|idade m[ií]nima|escolaridade|pr[eé]-requisito(s)?)\b",
        ],
        responses: &[
            "Os requisitos variam por curso (idade mínima e escolaridade). Se quiser, eu te passo os requisitos gerais.",
        ],
    },
    Entry {
        key: "requisitos_gerais",
        patterns: &[
            r"\b(quero saber mais|quais os requisitos?|quais sao os requisitos?|eu quero|me fale os requisitos)\b",
        ],
        responses: &[
            "Os requisitos de documentos podem variar conforme o curso escolhido (livre, técnico, graduação ou pós). Mas, em geral, o Senac Serra solicita os seguintes documentos no ato da matrícula:  Documento de identidade oficial com foto (RG, CNH ou equivalente)CPFComprovante de residência atualizadoComprovante de escolaridade compatível com o cursoPara menores de 18 anos:  documentos do responsável legal No caso de cursos técnicos ou de nível superior, pode ser necessário apresentar histórico escolar ou certificado de conclusão da etapa anterior (ensino fundamental ou médio, conforme o caso).",
        ],
    },
    Entry {
        key: "linha de onibus",
        patterns: &[
            r"\b(linha(s)?|onibus|transcol|busao)\b",
        ],
        responses: &[
            "Uma das linhas de ônibus que passam em frente ao Senac Serra é o 805B que é a linha que o caminho é para o bairro Feu Rosa,504,523 e 875",
        ],
    },
    Entry {
        key: "requisitos para incriçao",
        patterns: &[
            r"\b(sim|quero saber mais|como me inscrever?|como se increver?|como entrar no senac?)\b",
        ],
        responses: &[
            "Os requisitos para inscrição em um curso no Senac Serra (ES) podem variar de acordo com o tipo de curso escolhido (livres, técnicos, de graduação ou pós-graduação). Em geral, são pedidos:Documentos pessoais: RG, CPF e comprovante de residência atualizado. Comprovante de escolaridade: varia conforme o curso (por exemplo, estar cursando ou ter concluído o ensino médio para cursos técnicosIdade mínima: cada curso pode exigir uma idade mínima (alguns a partir de 14, outros 16 ou 18 anos). Pagamento da matrícula (quando não for bolsa ou gratuidade).",
        ],
    },
    Entry {
        key: "gastronomia",
        patterns: &[
            r"\b(gastronomia|cozinha|curso de gastronomia)\b",
        ],
        responses: &[
            "O curso de Gastronomia no Senac é bastante reconhecido pela qualidade de ensino e pela infraestrutura que possibilita ao estudante aprender na prática. Ele pode ser encontrado em diferentes formatos: cursos livres (curta duração), cursos técnicos e curso superior de tecnologia em Gastronomia. Curso Superior de Tecnologia em GastronomiaDuração aproximada: 2 anos.Objetivo: formar profissionais capacitados para atuar na produção, gestão e criação na área gastronômica. Conteúdos principais:Técnicas de cozinha nacional e internacionalPanificação e confeitariaNutrição aplicada à gastronomiaGestão de alimentos e bebidasHigiene e segurança alimentarEmpreendedorismo e gestão de negócios gastronômicosSustentabilidade e inovação na gastronomiaCursos Técnicos e Livres em GastronomiaCursos técnicos: voltados para atuação prática e inserção rápida no mercado de trabalho. Cursos livres: de curta duração, com foco em áreas específicas, como: confeitaria, panificação, cozinha básica, cozinha japonesa, cozinha italiana, dentre outros. São ideais para quem deseja desenvolver habilidades específicas ou se especializar em determinado segmento. Infraestrutura para apoio às aulasCozinhas pedagógicas equipadas com fogões industriais, bancadas, utensílios e câmaras frias.Laboratórios de panificação e confeitaria. Espaços que simulam ambientes de restaurantes, possibilitando práticas de atendimento.",
        ],
    },
    Entry {
        key: "lanches",
        patterns: &[
            r"\b(lanche|cozinha|comida|cantina|lanchonete|comprar)\b",
        ],
        responses: &[
            "No Senac Serra, assim como em outras unidades do Senac, normalmente há cantina/lanchonete ou espaço de convivência onde os estudantes podem comprar lanches nos intervalos das aulas. Esse serviço pode variar conforme o turno e a demanda de alunos. Em algumas situações, quando não há lanchonete interna funcionando, os estudantes utilizam os comércios próximos à unidade.",
        ],
    },
    Entry {
        key: "administraçao",
        patterns: &[
            r"\b(administraçao|curso de administraçao|administrar)\b",
        ],
        responses: &[
            "O curso Técnico em Administração do Senac tem como objetivo preparar o estudante para atuar em diferentes áreas administrativas, como gestão de pessoas, logística, marketing, finanças e processos organizacionais. Ele é estruturado com base no Modelo Pedagógico do Senac (MPS), que valoriza o protagonismo do estudante e a aprendizagem baseada em competências, aproximando teoria e prática.De forma geral, o curso contempla:Gestão de processos organizacionaisRotinas de departamento pessoal e recursos humanosNoções de contabilidade e finanças. Planejamento estratégico e marketingProjetos e inovação profissional formado pode atuar em empresas de diferentes portes e setores, órgãos públicos ou iniciar seu próprio negócio.",
        ],
    },
    Entry {
        key: "moda",
        patterns: &[
            r"\b(moda|estilo|modelo)\b",
        ],
        responses: &[
            "O Senac oferece formações em Moda que podem variar de cursos livres a cursos técnicos e superiores, dependendo da unidade. No caso do Senac Serra, o foco principal é preparar o estudante para atuar no mercado de moda de forma criativa e empreendedora, sempre com base no Modelo Pedagógico do Senac. De forma resumida, os cursos de Moda trabalham: Criação e desenvolvimento de coleções: do conceito ao produto final.  Desenho e modelagem: técnicas manuais e digitais.  Costura e acabamento: prática para confecção de peças.  Gestão e marketing de moda: visão de negócios, branding e tendências.  Sustentabilidade: incentivo a práticas conscientes na cadeia da moda.  O estudante desenvolve competências para atuar como estilista, modelista, produtor de moda, consultor de estilo ou gestor em empresas e marcas do setor, além de poder empreender o próprio negócio.",
        ],
    },
    Entry {
        key: "inauguraçao",
        patterns: &[
            r"\b(quando foi inaugurado|quantos anos tem o senac serra?|fundacao|inaugurado|inauguraçao|fundado)\b",
        ],
        responses: &[
            "O Senac Serra, localizado no Espírito Santo, foi inaugurado em 2021. A unidade é uma das mais novas do Senac-ES e foi criada para atender à forte demanda de formação profissional na região, que se destaca pelo crescimento industrial, comercial e de serviços. Desde sua inauguração, o Senac Serra oferece cursos em diversas áreas, como gestão, tecnologia, saúde, gastronomia, moda e beleza, sempre com base no Modelo Pedagógico do Senac (MPS), que valoriza a prática, a aprendizagem por competências e o protagonismo do estudante.",
        ],
    },
    Entry {
        key: "padrao",
        patterns: &[],
        responses: &[
            "Posso te ajudar com informações sobre cursos, inscrições, valores, modalidades e estrutura do Senac Serra. Pode me dizer o que você precisa?",
            "Não tenho certeza se entendi. Você quer saber sobre cursos, valores, inscrições, horários ou localização?",
            "Certo. Me diga a área de interesse (por exemplo, Administração, Tecnologia ou Gastronomia) e eu te oriento.",
        ],
    },
];

/// Raw definitions of the built-in catalog, in catalog order.
pub fn builtin_definitions() -> Vec<CategoryDef> {
    CATALOG
        .iter()
        .map(|entry| CategoryDef {
            key: entry.key.to_string(),
            patterns: entry.patterns.iter().map(|p| p.to_string()).collect(),
            responses: entry.responses.iter().map(|r| r.to_string()).collect(),
            fallback: entry.key == FALLBACK_KEY,
        })
        .collect()
}

/// Builds the validated built-in table.
pub fn builtin_table() -> Result<CategoryTable, AssistantError> {
    CategoryTable::from_definitions(builtin_definitions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = builtin_table().expect("built-in catalog must validate");
        assert_eq!(table.len(), CATALOG.len());
        assert_eq!(table.fallback().key(), FALLBACK_KEY);
        assert!(table.fallback().patterns().is_empty());
        assert_eq!(table.fallback().responses().len(), 3);
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let table = builtin_table().unwrap();
        let keys: Vec<&str> = table.iter().map(|c| c.key()).collect();
        assert_eq!(keys.first(), Some(&"saudacao"));
        assert_eq!(keys.get(1), Some(&"despedida"));
        assert_eq!(keys.last(), Some(&FALLBACK_KEY));
    }

    #[test]
    fn test_keys_with_spaces_and_cedillas_are_kept() {
        let table = builtin_table().unwrap();
        assert!(table.get("linha de onibus").is_some());
        assert!(table.get("requisitos para incriçao").is_some());
        assert!(table.get("administraçao").is_some());
    }

    #[test]
    fn test_price_category_has_single_response() {
        let table = builtin_table().unwrap();
        let price = table.get("valores_pagamento").unwrap();
        assert_eq!(price.responses().len(), 1);
        assert!(price.responses()[0].starts_with("Os valores variam conforme o curso"));
    }
}
